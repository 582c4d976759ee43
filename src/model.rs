//! Wire types exchanged with the QR code service.

use serde::{Deserialize, Serialize};

/// A QR code record as stored by the service.
///
/// The service owns these; the client never caches them and re-lists after
/// every mutation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QrCodeRecord {
    pub id: String,
    pub filename: String,
    pub data_encoded: String,
    /// Relative path to the rendered image, e.g. `/qrcode_image/<id>`.
    pub qrcode_url: String,
    /// SQLite `CURRENT_TIMESTAMP` text on the reference service.
    pub created_at: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub id: String,
    pub filename: String,
    pub qrcode_url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    // Updates are delete-and-recreate on the reference service, so the
    // record usually comes back under a new id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_filename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qrcode_url: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QrCodeData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub data_encoded: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct UpdateRequest<'a> {
    pub(crate) new_data_encoded: &'a str,
}

/// Body of any non-2xx response.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub(crate) error: Option<String>,
}

use std::path::PathBuf;

use crate::model::{MessageResponse, QrCodeData, QrCodeRecord, UpdateResponse, UploadResponse};
use crate::remote::ApiError;

use super::Tab;

/// Input from whatever front end is driving the controller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiEvent {
    SelectTab(Tab),
    RefreshList,
    RefreshData,
    SubmitUpload,
    ViewImage { qrcode_url: String },
    ViewGeneratedImage,
    OpenEdit { id: String },
    SaveEdit,
    CloseEdit,
    RequestDelete { id: String },
    ConfirmDelete(bool),
    DismissAlert,
    SelectNext,
    SelectPrev,
}

/// One network call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Request {
    Upload { path: PathBuf },
    List,
    FetchForEdit { id: String },
    Update { id: String, new_data_encoded: String },
    Delete { id: String },
    ExampleData,
}

impl Request {
    pub fn label(&self) -> &'static str {
        match self {
            Request::Upload { .. } => "upload",
            Request::List => "list",
            Request::FetchForEdit { .. } => "fetch_for_edit",
            Request::Update { .. } => "update",
            Request::Delete { .. } => "delete",
            Request::ExampleData => "example_data",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    Request(Request),
    /// Open in the system browser or image viewer.
    OpenUrl(String),
}

/// A completed request, fed back into the controller.
#[derive(Debug)]
pub enum Outcome {
    Uploaded(Result<UploadResponse, ApiError>),
    Listed(Result<Vec<QrCodeRecord>, ApiError>),
    FetchedForEdit {
        id: String,
        result: Result<QrCodeData, ApiError>,
    },
    Updated {
        id: String,
        result: Result<UpdateResponse, ApiError>,
    },
    Deleted {
        id: String,
        result: Result<MessageResponse, ApiError>,
    },
    ExampleData(Result<serde_json::Value, ApiError>),
}

use std::path::Path;

use anyhow::{Context, Result};

use crate::model::{MessageResponse, QrCodeData, QrCodeRecord, UpdateResponse, UploadResponse};

mod error;
pub use self::error::{ApiError, UNKNOWN_ERROR};

mod http_client;
mod operations;

mod upload;
pub use self::upload::UploadFile;

/// The six remote operations the controller depends on.
///
/// `QrClient` is the HTTP implementation; tests substitute in-process fakes.
pub trait QrApi {
    fn upload(&self, file: &UploadFile) -> Result<UploadResponse, ApiError>;
    fn list(&self) -> Result<Vec<QrCodeRecord>, ApiError>;
    fn fetch_for_edit(&self, id: &str) -> Result<QrCodeData, ApiError>;
    fn update(&self, id: &str, new_data_encoded: &str) -> Result<UpdateResponse, ApiError>;
    fn delete(&self, id: &str) -> Result<MessageResponse, ApiError>;
    fn example_data(&self) -> Result<serde_json::Value, ApiError>;

    fn read_upload(&self, path: &Path) -> Result<UploadFile, ApiError> {
        UploadFile::read(path)
    }
}

pub struct QrClient {
    base_url: reqwest::Url,
    client: reqwest::blocking::Client,
}

impl QrClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = crate::config::parse_base_url(base_url)?;
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("qrdesk/", env!("CARGO_PKG_VERSION")))
            .timeout(None::<std::time::Duration>)
            .build()
            .context("build reqwest client")?;
        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    /// Resolves a server-relative image path against the base URL.
    pub fn resolve_url(&self, path: &str) -> String {
        resolve_against(self.base_url(), path)
    }
}

impl QrApi for QrClient {
    fn upload(&self, file: &UploadFile) -> Result<UploadResponse, ApiError> {
        self.upload_and_generate(file)
    }

    fn list(&self) -> Result<Vec<QrCodeRecord>, ApiError> {
        self.list_qrcodes()
    }

    fn fetch_for_edit(&self, id: &str) -> Result<QrCodeData, ApiError> {
        self.get_qrcode_data(id)
    }

    fn update(&self, id: &str, new_data_encoded: &str) -> Result<UpdateResponse, ApiError> {
        self.update_qrcode(id, new_data_encoded)
    }

    fn delete(&self, id: &str) -> Result<MessageResponse, ApiError> {
        self.delete_qrcode(id)
    }

    fn example_data(&self) -> Result<serde_json::Value, ApiError> {
        self.get_example_data()
    }
}

/// Joins a server-relative path onto `base`. Absolute URLs pass through.
pub fn resolve_against(base: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

#[cfg(test)]
#[path = "tests/remote/resolve_tests.rs"]
mod tests;

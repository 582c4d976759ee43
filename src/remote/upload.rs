use std::path::Path;

use super::ApiError;

/// A spreadsheet read from disk, ready to be sent as the `excel_file` part.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn read(path: &Path) -> Result<Self, ApiError> {
        let bytes = std::fs::read(path).map_err(|source| ApiError::LocalFile {
            path: path.to_path_buf(),
            source,
        })?;
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload.xlsx".to_string());
        Ok(Self { filename, bytes })
    }

    pub fn mime_type(&self) -> &'static str {
        let ext = Path::new(&self.filename)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("xlsx") => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            Some("xls") => "application/vnd.ms-excel",
            Some("csv") => "text/csv",
            _ => "application/octet-stream",
        }
    }

    pub(super) fn to_part(&self) -> Result<reqwest::blocking::multipart::Part, ApiError> {
        let part = reqwest::blocking::multipart::Part::bytes(self.bytes.clone())
            .file_name(self.filename.clone())
            .mime_str(self.mime_type())?;
        Ok(part)
    }
}

#[cfg(test)]
#[path = "../tests/remote/upload_tests.rs"]
mod tests;

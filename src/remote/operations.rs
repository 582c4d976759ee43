//! The six service calls. None of them retry.

use super::*;
use crate::model::UpdateRequest;

impl QrClient {
    pub fn upload_and_generate(&self, file: &UploadFile) -> Result<UploadResponse, ApiError> {
        let form = reqwest::blocking::multipart::Form::new().part("excel_file", file.to_part()?);
        tracing::info!(
            event = "remote.upload.started",
            file = %file.filename,
            bytes = file.bytes.len()
        );
        let resp = self
            .client
            .post(self.endpoint(&["upload_and_generate_qr"])?)
            .multipart(form)
            .send()?;
        let out: UploadResponse = self.ensure_ok(resp, "upload")?.json()?;
        tracing::info!(event = "remote.upload.completed", id = %out.id);
        Ok(out)
    }

    pub fn list_qrcodes(&self) -> Result<Vec<QrCodeRecord>, ApiError> {
        let resp = self.client.get(self.endpoint(&["list_qrcodes"])?).send()?;
        let records: Vec<QrCodeRecord> = self.ensure_ok(resp, "list")?.json()?;
        tracing::debug!(event = "remote.list.completed", count = records.len());
        Ok(records)
    }

    pub fn get_qrcode_data(&self, id: &str) -> Result<QrCodeData, ApiError> {
        let resp = self
            .client
            .get(self.endpoint(&["get_qrcode_data", id])?)
            .send()?;
        let data: QrCodeData = self.ensure_ok(resp, "get data")?.json()?;
        Ok(data)
    }

    pub fn update_qrcode(
        &self,
        id: &str,
        new_data_encoded: &str,
    ) -> Result<UpdateResponse, ApiError> {
        let resp = self
            .client
            .post(self.endpoint(&["update_qrcode", id])?)
            .json(&UpdateRequest { new_data_encoded })
            .send()?;
        let out: UpdateResponse = self.ensure_ok(resp, "update")?.json()?;
        tracing::info!(
            event = "remote.update.completed",
            old_id = id,
            new_id = out.new_id.as_deref().unwrap_or("-")
        );
        Ok(out)
    }

    pub fn delete_qrcode(&self, id: &str) -> Result<MessageResponse, ApiError> {
        let resp = self
            .client
            .delete(self.endpoint(&["delete_qrcode", id])?)
            .send()?;
        let out: MessageResponse = self.ensure_ok(resp, "delete")?.json()?;
        tracing::info!(event = "remote.delete.completed", id = id);
        Ok(out)
    }

    pub fn get_example_data(&self) -> Result<serde_json::Value, ApiError> {
        let resp = self.client.get(self.endpoint(&["dados"])?).send()?;
        let value: serde_json::Value = self.ensure_ok(resp, "example data")?.json()?;
        Ok(value)
    }
}

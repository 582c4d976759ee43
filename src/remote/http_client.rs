use super::*;
use crate::model::ErrorBody;

impl QrClient {
    /// Builds `<base>/<segments...>`, percent-encoding each segment.
    pub(super) fn endpoint(&self, segments: &[&str]) -> Result<reqwest::Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::Transport(format!("invalid base url {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Passes 2xx responses through; turns anything else into
    /// `ApiError::Application` carrying the body's `error` text.
    pub(super) fn ensure_ok(
        &self,
        resp: reqwest::blocking::Response,
        label: &str,
    ) -> Result<reqwest::blocking::Response, ApiError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let body = resp.bytes().unwrap_or_default();
        let message = error_message_from_body(&body);
        tracing::debug!(
            event = "remote.request.rejected",
            op = label,
            status = status.as_u16(),
            message = %message
        );
        Err(ApiError::Application {
            status: status.as_u16(),
            message,
        })
    }
}

/// Extracts the `error` field of a JSON body, or the fixed fallback.
pub(crate) fn error_message_from_body(body: &[u8]) -> String {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .unwrap_or_else(|| UNKNOWN_ERROR.to_string())
}

#[cfg(test)]
#[path = "../tests/remote/http_client_tests.rs"]
mod tests;

//! Turns non-200 gateway responses into typed errors

use crate::error::ApiError;
use crate::models::ErrorEnvelope;

/// Longest body excerpt written to the log when decoding fails
const BODY_PREVIEW_LIMIT: usize = 500;

/// Decode a failed response body.
///
/// A body shaped like `{"Error":{"Code":..,"Message":..}}` becomes
/// `ApiError::Service`. Anything else becomes `ApiError::UnexpectedStatus`;
/// the parse failure is logged, never returned.
pub fn decode(status: u16, body: &str) -> ApiError {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => ApiError::Service {
            status,
            code: envelope.error.code,
            message: envelope.error.message,
        },
        Err(e) => {
            tracing::warn!(
                status,
                "Could not parse error body: {}. Body: {}",
                e,
                preview(body)
            );
            ApiError::UnexpectedStatus { status }
        }
    }
}

/// Read the body of a failed response and decode it
pub async fn decode_response(response: reqwest::Response) -> ApiError {
    let status = response.status().as_u16();
    match response.text().await {
        Ok(body) => decode(status, &body),
        Err(e) => {
            tracing::warn!(status, "Failed to read error body: {}", e);
            ApiError::UnexpectedStatus { status }
        }
    }
}

/// Leading slice of a body, cut on a char boundary, for log lines
pub(crate) fn preview(body: &str) -> &str {
    match body.char_indices().nth(BODY_PREVIEW_LIMIT) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use moviecast_core::movie::LookupError;
use moviecast_core::storage::{lookup_error_body, lookup_error_to_status_code};

/// Handler error that renders a [`LookupError`] as a JSON response.
///
/// Upstream failures are logged with their source; the response only carries
/// the fixed caller-facing message.
#[derive(Debug)]
pub struct AppError(pub LookupError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(lookup_error_to_status_code(&self.0))
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        match &self.0 {
            LookupError::Upstream { message, source } => {
                tracing::error!(error = %source, reason = %message, "Lookup failed");
            }
            other => {
                tracing::warn!(status = %status, reason = %other, "Lookup rejected");
            }
        }

        (status, Json(lookup_error_body(&self.0))).into_response()
    }
}

impl From<LookupError> for AppError {
    fn from(err: LookupError) -> Self {
        Self(err)
    }
}

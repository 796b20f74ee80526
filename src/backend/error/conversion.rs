/**
 * Error Conversion
 *
 * `IntoResponse` for `BackendError`, so handlers can return it directly.
 *
 * # Response Format
 *
 * ```json
 * { "message": "Validation failed", "validation": { "field": "email", "message": "..." } }
 * ```
 *
 * `validation` is only present for schema-validation failures. Internal
 * errors are logged here and rendered with a generic message.
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;

use crate::backend::error::types::BackendError;
use crate::shared::FieldViolation;

#[derive(Serialize)]
struct ErrorBody<'a> {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    validation: Option<&'a FieldViolation>,
}

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::debug!("Request rejected with {}: {}", status.as_u16(), self);
        }

        let body = ErrorBody {
            message: self.message(),
            validation: self.violation(),
        };

        (status, Json(body)).into_response()
    }
}

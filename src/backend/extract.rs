//! Request extractors
//!
//! `ValidJson` parses and validates a JSON body in one step so handlers only
//! ever see payloads that passed their schema. `RecordId` does the same for
//! the `{id}` path segment.

use axum::{
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::backend::error::types::INVALID_ID_MESSAGE;
use crate::backend::error::BackendError;
use crate::shared::{SharedError, Validate};

/// JSON body that has passed [`Validate`]
///
/// Parse failures and rule violations both reject with `400 Bad Request`.
#[derive(Debug, Clone)]
pub struct ValidJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            tracing::warn!("Rejected request body: {}", rejection.body_text());
            BackendError::from(SharedError::malformed(rejection.body_text()))
        })?;

        value.validate().map_err(|e| {
            tracing::warn!("{}", e);
            BackendError::from(e)
        })?;

        Ok(Self(value))
    }
}

/// Record id taken from the `{id}` path segment
///
/// Undecodable segments and non-UUID values both reject with
/// `400 Invalid id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordId(pub Uuid);

impl<S> FromRequestParts<S> for RecordId
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                tracing::warn!("Rejected path: {}", rejection.body_text());
                BackendError::bad_request(INVALID_ID_MESSAGE)
            })?;

        parse_id(&raw).map(Self)
    }
}

/// Parse a path segment as a record id
pub fn parse_id(raw: &str) -> Result<Uuid, BackendError> {
    Uuid::parse_str(raw).map_err(|_| {
        tracing::warn!("Invalid id in path: {}", raw);
        BackendError::bad_request(INVALID_ID_MESSAGE)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::CreateCardRequest;
    use axum::{body::Body, http::StatusCode};

    fn json_request(body: &str) -> Request {
        Request::builder()
            .method("POST")
            .uri("/cards")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_body_is_extracted() {
        let request = json_request(r#"{"name":"Baikal","link":"https://example.com/b.jpg"}"#);
        let ValidJson(card) = ValidJson::<CreateCardRequest>::from_request(request, &())
            .await
            .unwrap();
        assert_eq!(card.name, "Baikal");
    }

    #[tokio::test]
    async fn test_syntax_error_is_bad_request() {
        let request = json_request(r#"{"name":"#);
        let err = ValidJson::<CreateCardRequest>::from_request(request, &())
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert!(err.violation().is_none());
    }

    #[tokio::test]
    async fn test_rule_violation_is_bad_request_with_details() {
        let request = json_request(r#"{"name":"Baikal","link":"not-a-link"}"#);
        let err = ValidJson::<CreateCardRequest>::from_request(request, &())
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.violation().map(|v| v.field.as_str()), Some("link"));
    }

    #[tokio::test]
    async fn test_missing_content_type_is_bad_request() {
        let request = Request::builder()
            .method("POST")
            .uri("/cards")
            .body(Body::from("{}"))
            .unwrap();
        let err = ValidJson::<CreateCardRequest>::from_request(request, &())
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    async fn get_record(uri: &str) -> (StatusCode, serde_json::Value) {
        use axum::{routing::get, Router};
        use tower::ServiceExt;

        let app = Router::new().route(
            "/cards/{id}",
            get(|RecordId(id): RecordId| async move { Json(serde_json::json!({ "id": id })) }),
        );

        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_record_id_from_path() {
        let id = Uuid::new_v4();
        let (status, body) = get_record(&format!("/cards/{}", id)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], id.to_string());
    }

    #[tokio::test]
    async fn test_record_id_rejections_are_json() {
        for uri in ["/cards/12345", "/cards/%FF"] {
            let (status, body) = get_record(uri).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body["message"], INVALID_ID_MESSAGE);
        }
    }

    #[test]
    fn test_parse_id() {
        let id = Uuid::new_v4();
        assert_eq!(parse_id(&id.to_string()).unwrap(), id);
        assert_eq!(
            parse_id("64b7f0c2e4b0a1b2c3d4e5f6").unwrap_err().status_code(),
            StatusCode::BAD_REQUEST
        );
    }
}

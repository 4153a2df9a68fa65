use crate::errors::{
    FieldError, ServiceError,
    error::{ErrorResponse, ValidationErrorResponse},
};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::debug;

/// Every failure a handler can answer with.
///
/// Store failures answer `400` with the driver's message. A missing record
/// answers `404`.
#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    NotFound(String),
    PayloadTooLarge(String),
    Validation(Vec<FieldError>),
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound(msg) => HttpError::NotFound(msg),
            ServiceError::Repo(repo_err) => HttpError::BadRequest(repo_err.to_string()),
            ServiceError::InvalidQuery(msg) => HttpError::BadRequest(msg),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            HttpError::Validation(errors) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ValidationErrorResponse { errors }),
                )
                    .into_response();
            }
            HttpError::BadRequest(msg) => {
                debug!("bad request: {msg}");
                (StatusCode::BAD_REQUEST, msg)
            }
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            HttpError::PayloadTooLarge(msg) => (StatusCode::PAYLOAD_TOO_LARGE, msg),
        };

        (status, Json(ErrorResponse { message: msg })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::RepositoryError;

    #[test]
    fn not_found_keeps_its_message() {
        let err = HttpError::from(ServiceError::NotFound("Order not found".into()));
        assert!(matches!(err, HttpError::NotFound(ref m) if m == "Order not found"));
    }

    #[test]
    fn store_failures_surface_as_bad_request() {
        let err = HttpError::from(ServiceError::Repo(RepositoryError::InvalidId("abc".into())));
        match err {
            HttpError::BadRequest(msg) => assert!(msg.contains("\"abc\"")),
            other => panic!("unexpected mapping: {other:?}"),
        }
    }

    #[test]
    fn response_status_codes() {
        let resp = HttpError::Validation(vec![FieldError::new("total", "bad")]).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = HttpError::NotFound("Order not found".into()).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let resp = HttpError::BadRequest("boom".into()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}

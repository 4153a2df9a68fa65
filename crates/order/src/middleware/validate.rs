use crate::domain::requests::validation::{ValidatedPayload, ordered_field_errors};
use axum::{
    extract::{FromRequest, Request},
    http::StatusCode,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::errors::HttpError;
use tracing::debug;

/// JSON body extractor that runs the payload's rules and hands the handler
/// the converted value.
///
/// Unparseable bodies answer `400 {message}`, rule failures `400 {errors}`
/// listed in the payload's declared field order.
pub struct SimpleValidatedJson<T: ValidatedPayload>(pub T::Output);

impl<S, T> FromRequest<S> for SimpleValidatedJson<T>
where
    T: DeserializeOwned + ValidatedPayload + Send,
    T::Output: Send,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(body) = axum::Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| {
                debug!("rejected request body: {}", rejection.body_text());
                if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                    HttpError::PayloadTooLarge(rejection.body_text())
                } else {
                    HttpError::BadRequest(rejection.body_text())
                }
            })?;

        if !body.is_object() {
            return Err(HttpError::BadRequest(
                "Request body must be a JSON object".to_string(),
            ));
        }

        let payload: T =
            serde_json::from_value(body).map_err(|e| HttpError::BadRequest(e.to_string()))?;

        let parsed = payload
            .parse()
            .map_err(|errors| HttpError::Validation(ordered_field_errors(&errors, T::FIELDS)))?;

        Ok(Self(parsed))
    }
}

#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header::CONTENT_TYPE},
};
use order::{handler::AppRouter, state::AppState};
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

pub const BODY_LIMIT: usize = 64 * 1024;

pub async fn app() -> Router {
    let state = AppState::in_memory(BODY_LIMIT).await.unwrap();
    AppRouter::build(Arc::new(state))
}

pub fn valid_order() -> Value {
    json!({
        "customerName": "John Doe",
        "quantity": 2,
        "product": "Product A",
        "unitPrice": 50,
        "hasDeliveryFee": true,
        "deliveryFee": 10,
        "total": 110,
        "status": "Pending"
    })
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    send_request(app, request).await
}

pub async fn send_request(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };
    (status, json)
}

pub async fn create(app: &Router, body: Value) -> Value {
    let (status, json) = send(app, "POST", "/api/orders", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED, "{json}");
    json
}

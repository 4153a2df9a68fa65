mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode, header::{CONTENT_LENGTH, CONTENT_TYPE}},
};
use common::{BODY_LIMIT, app, create, send, send_request, valid_order};
use serde_json::{Value, json};

fn messages(body: &Value) -> Vec<(String, String)> {
    body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| {
            (
                e["field"].as_str().unwrap().to_string(),
                e["message"].as_str().unwrap().to_string(),
            )
        })
        .collect()
}

fn pair(field: &str, message: &str) -> (String, String) {
    (field.to_string(), message.to_string())
}

#[tokio::test]
async fn empty_create_lists_every_required_field() {
    let app = app().await;

    let (status, body) = send(&app, "POST", "/api/orders", Some(json!({}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        messages(&body),
        vec![
            pair("customerName", "Customer name is required"),
            pair("quantity", "Quantity must be an integer greater than 0"),
            pair("product", "Product name is required"),
            pair("unitPrice", "Unit price must be a positive number"),
            pair("hasDeliveryFee", "hasDeliveryFee must be a boolean"),
            pair("total", "Total must be a positive number"),
            pair(
                "status",
                "Status must be either Pending, Done, Delivered and Paid, or Delivered and Unpaid"
            ),
        ]
    );

    let (_, page) = send(&app, "GET", "/api/orders", None).await;
    assert_eq!(page["orders"], json!([]));
}

#[tokio::test]
async fn unknown_status_is_rejected() {
    let app = app().await;
    let mut body = valid_order();
    body["status"] = json!("Invalid Status");

    let (status, body) = send(&app, "POST", "/api/orders", Some(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        messages(&body),
        vec![pair(
            "status",
            "Status must be either Pending, Done, Delivered and Paid, or Delivered and Unpaid"
        )]
    );
}

#[tokio::test]
async fn zero_quantity_and_negative_prices_are_rejected() {
    let app = app().await;
    let mut body = valid_order();
    body["quantity"] = json!(0);
    body["unitPrice"] = json!(-1);
    body["deliveryFee"] = json!(-2.5);

    let (status, body) = send(&app, "POST", "/api/orders", Some(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        messages(&body),
        vec![
            pair("quantity", "Quantity must be an integer greater than 0"),
            pair("unitPrice", "Unit price must be a positive number"),
            pair("deliveryFee", "Delivery fee must be a positive number"),
        ]
    );
}

#[tokio::test]
async fn wrong_json_types_are_rejected() {
    let app = app().await;
    let mut body = valid_order();
    body["customerName"] = json!(["John"]);
    body["product"] = json!(7);
    body["hasDeliveryFee"] = json!("yes");

    let (status, body) = send(&app, "POST", "/api/orders", Some(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        messages(&body),
        vec![
            pair("customerName", "Customer name must be a string"),
            pair("product", "Product name must be a string"),
            pair("hasDeliveryFee", "hasDeliveryFee must be a boolean"),
        ]
    );
}

#[tokio::test]
async fn numeric_and_boolean_strings_are_coerced_on_create() {
    let app = app().await;
    let mut body = valid_order();
    body["quantity"] = json!("2");
    body["unitPrice"] = json!("50");
    body["hasDeliveryFee"] = json!("true");

    let created = create(&app, body).await;

    assert_eq!(created["quantity"], 2);
    assert_eq!(created["unitPrice"], 50.0);
    assert_eq!(created["hasDeliveryFee"], true);
}

#[tokio::test]
async fn numeric_and_boolean_strings_are_coerced_on_update() {
    let app = app().await;
    let created = create(&app, valid_order()).await;
    let uri = format!("/api/orders/{}", created["id"].as_str().unwrap());

    let (status, updated) = send(
        &app,
        "PUT",
        &uri,
        Some(json!({ "quantity": "5", "total": "250.5", "hasDeliveryFee": "0" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK, "{updated}");
    assert_eq!(updated["quantity"], 5);
    assert_eq!(updated["total"], 250.5);
    assert_eq!(updated["hasDeliveryFee"], false);
}

#[tokio::test]
async fn non_numeric_strings_are_still_rejected() {
    let app = app().await;
    let mut body = valid_order();
    body["quantity"] = json!("two");
    body["hasDeliveryFee"] = json!("yes");

    let (status, body) = send(&app, "POST", "/api/orders", Some(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        messages(&body),
        vec![
            pair("quantity", "Quantity must be an integer greater than 0"),
            pair("hasDeliveryFee", "hasDeliveryFee must be a boolean"),
        ]
    );
}

#[tokio::test]
async fn zero_prices_are_accepted() {
    let app = app().await;
    let mut body = valid_order();
    body["unitPrice"] = json!(0);
    body["deliveryFee"] = json!(0);
    body["total"] = json!(0);
    body["hasDeliveryFee"] = json!(false);

    let created = create(&app, body).await;
    assert_eq!(created["total"], 0.0);
}

#[tokio::test]
async fn missing_delivery_fee_is_stored_as_zero() {
    let app = app().await;
    let mut body = valid_order();
    body.as_object_mut().unwrap().remove("deliveryFee");
    body["hasDeliveryFee"] = json!(false);

    let created = create(&app, body).await;
    assert_eq!(created["deliveryFee"], 0.0);
}

#[tokio::test]
async fn update_with_invalid_field_leaves_record_untouched() {
    let app = app().await;
    let created = create(&app, valid_order()).await;
    let uri = format!("/api/orders/{}", created["id"].as_str().unwrap());

    let (status, body) = send(
        &app,
        "PUT",
        &uri,
        Some(json!({ "quantity": -1, "customerName": "Jane" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        messages(&body),
        vec![pair("quantity", "Quantity must be an integer greater than 0")]
    );

    let (_, fetched) = send(&app, "GET", &uri, None).await;
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn malformed_bodies_answer_with_a_message() {
    let app = app().await;

    let request = Request::builder()
        .method("POST")
        .uri("/api/orders")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from("{\"customerName\": "))
        .unwrap();
    let (status, body) = send_request(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].is_string());

    let (status, body) = send(&app, "POST", "/api/orders", Some(json!([1, 2, 3]))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].is_string());

    let request = Request::builder()
        .method("POST")
        .uri("/api/orders")
        .body(Body::from(valid_order().to_string()))
        .unwrap();
    let (status, body) = send_request(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn oversized_bodies_are_refused() {
    let app = app().await;
    let mut body = valid_order();
    body["customerName"] = json!("x".repeat(BODY_LIMIT + 1));

    let payload = body.to_string();

    let request = Request::builder()
        .method("POST")
        .uri("/api/orders")
        .header(CONTENT_TYPE, "application/json")
        .header(CONTENT_LENGTH, payload.len())
        .body(Body::from(payload))
        .unwrap();
    let (status, _) = send_request(&app, request).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
}

use crate::model::order::{Order as OrderModel, OrderStatus};
use chrono::{DateTime, Utc};
use mongodb::bson;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    /// Hex object id
    #[schema(example = "665f1c2e8b3e4a2d9c1b7a10")]
    pub id: String,
    pub customer_name: String,
    pub quantity: i64,
    pub product: String,
    pub unit_price: f64,
    pub has_delivery_fee: bool,
    pub delivery_fee: f64,
    pub total: f64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Incremented on every update
    pub version: i64,
}

fn to_utc(value: bson::DateTime) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(value.timestamp_millis()).unwrap_or_default()
}

// model to response
impl From<OrderModel> for OrderResponse {
    fn from(value: OrderModel) -> Self {
        OrderResponse {
            id: value.id.to_hex(),
            customer_name: value.customer_name,
            quantity: value.quantity,
            product: value.product,
            unit_price: value.unit_price,
            has_delivery_fee: value.has_delivery_fee,
            delivery_fee: value.delivery_fee,
            total: value.total,
            status: value.status,
            created_at: to_utc(value.created_at),
            updated_at: to_utc(value.updated_at),
            version: value.version,
        }
    }
}

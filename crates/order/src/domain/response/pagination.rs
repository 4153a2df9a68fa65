use crate::domain::response::order::OrderResponse;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One page of `GET /api/orders`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderPaginationResponse {
    pub orders: Vec<OrderResponse>,
    #[schema(example = 9)]
    pub total_pages: u64,
    #[schema(example = 1)]
    pub current_page: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Order successfully deleted")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

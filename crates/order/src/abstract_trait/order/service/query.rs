use crate::domain::{
    requests::FindAllOrders,
    response::{order::OrderResponse, pagination::OrderPaginationResponse},
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynOrderQueryService = Arc<dyn OrderQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderQueryServiceTrait {
    async fn find_all(&self, req: &FindAllOrders)
    -> Result<OrderPaginationResponse, ServiceError>;
    async fn find_by_id(&self, id: &str) -> Result<OrderResponse, ServiceError>;
}

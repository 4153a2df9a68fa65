use crate::{
    domain::response::{order::OrderResponse, pagination::MessageResponse},
    model::order::{NewOrder, OrderPatch},
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynOrderCommandService = Arc<dyn OrderCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderCommandServiceTrait {
    async fn create_order(&self, req: NewOrder) -> Result<OrderResponse, ServiceError>;
    async fn update_order(
        &self,
        id: &str,
        patch: OrderPatch,
    ) -> Result<OrderResponse, ServiceError>;
    async fn delete_order(&self, id: &str) -> Result<MessageResponse, ServiceError>;
}

use crate::model::order::{NewOrder, Order as OrderModel, OrderPatch};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynOrderCommandRepository = Arc<dyn OrderCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait OrderCommandRepositoryTrait {
    async fn create_order(&self, req: &NewOrder) -> Result<OrderModel, RepositoryError>;
    /// Returns the record after the change, or `None` when `id` matches nothing.
    async fn update_order(
        &self,
        id: &str,
        patch: &OrderPatch,
    ) -> Result<Option<OrderModel>, RepositoryError>;
    /// `false` when nothing was removed.
    async fn delete_order(&self, id: &str) -> Result<bool, RepositoryError>;
}

use crate::model::order::Order as OrderModel;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynOrderQueryRepository = Arc<dyn OrderQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait OrderQueryRepositoryTrait {
    /// A window of orders by creation time, plus the collection-wide count.
    async fn find_all(&self, skip: u64, limit: i64)
    -> Result<(Vec<OrderModel>, u64), RepositoryError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<OrderModel>, RepositoryError>;
}

use crate::{
    abstract_trait::order::repository::{OrderCommandRepositoryTrait, OrderQueryRepositoryTrait},
    model::order::{NewOrder, Order as OrderModel, OrderPatch},
    repository::order::parse_object_id,
};
use async_trait::async_trait;
use mongodb::bson::{DateTime, oid::ObjectId};
use shared::errors::RepositoryError;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

/// Process-local order store with the same id and ordering rules as the
/// MongoDB repositories. Clones share one store.
#[derive(Clone, Default)]
pub struct MemoryOrderRepository {
    orders: Arc<RwLock<Vec<OrderModel>>>,
}

impl MemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrderQueryRepositoryTrait for MemoryOrderRepository {
    async fn find_all(
        &self,
        skip: u64,
        limit: i64,
    ) -> Result<(Vec<OrderModel>, u64), RepositoryError> {
        let orders = self.orders.read().await;

        let mut sorted: Vec<&OrderModel> = orders.iter().collect();
        // stable: insertion order breaks creation-time ties
        sorted.sort_by_key(|o| o.created_at);

        let skip = usize::try_from(skip).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit.max(0)).unwrap_or(usize::MAX);

        let page = sorted.into_iter().skip(skip).take(limit).cloned().collect();

        Ok((page, orders.len() as u64))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<OrderModel>, RepositoryError> {
        let oid = parse_object_id(id)?;
        let orders = self.orders.read().await;

        Ok(orders.iter().find(|o| o.id == oid).cloned())
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for MemoryOrderRepository {
    async fn create_order(&self, req: &NewOrder) -> Result<OrderModel, RepositoryError> {
        let order = OrderModel::from_new(ObjectId::new(), req.clone(), DateTime::now());

        self.orders.write().await.push(order.clone());

        info!("✅ Created order {} in memory", order.id);
        Ok(order)
    }

    async fn update_order(
        &self,
        id: &str,
        patch: &OrderPatch,
    ) -> Result<Option<OrderModel>, RepositoryError> {
        let oid = parse_object_id(id)?;
        let mut orders = self.orders.write().await;

        let Some(order) = orders.iter_mut().find(|o| o.id == oid) else {
            return Ok(None);
        };

        patch.apply(order);
        order.updated_at = DateTime::now().max(order.created_at);
        order.version += 1;

        Ok(Some(order.clone()))
    }

    async fn delete_order(&self, id: &str) -> Result<bool, RepositoryError> {
        let oid = parse_object_id(id)?;
        let mut orders = self.orders.write().await;

        let before = orders.len();
        orders.retain(|o| o.id != oid);

        Ok(orders.len() < before)
    }
}

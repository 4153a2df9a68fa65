use crate::{
    abstract_trait::order::repository::OrderQueryRepositoryTrait,
    model::order::{COLLECTION, Order as OrderModel},
    repository::order::parse_object_id,
};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{Collection, bson::doc};
use shared::{config::MongoDatabase, errors::RepositoryError};
use tracing::{error, info};

pub struct OrderQueryRepository {
    collection: Collection<OrderModel>,
}

impl OrderQueryRepository {
    pub fn new(db: &MongoDatabase) -> Self {
        Self {
            collection: db.collection(COLLECTION),
        }
    }
}

#[async_trait]
impl OrderQueryRepositoryTrait for OrderQueryRepository {
    async fn find_all(
        &self,
        skip: u64,
        limit: i64,
    ) -> Result<(Vec<OrderModel>, u64), RepositoryError> {
        let cursor = self
            .collection
            .find(doc! {})
            .sort(doc! { "createdAt": 1, "_id": 1 })
            .skip(skip)
            .limit(limit)
            .await
            .map_err(|err| {
                error!("❌ Failed to query orders: {err:?}");
                RepositoryError::from(err)
            })?;

        let orders: Vec<OrderModel> = cursor.try_collect().await?;
        let total = self.collection.count_documents(doc! {}).await?;

        info!("✅ Retrieved {} orders (total: {total})", orders.len());
        Ok((orders, total))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<OrderModel>, RepositoryError> {
        let oid = parse_object_id(id)?;

        let order = self
            .collection
            .find_one(doc! { "_id": oid })
            .await
            .map_err(|err| {
                error!("❌ Failed to fetch order {id}: {err:?}");
                RepositoryError::from(err)
            })?;

        match &order {
            Some(_) => info!("✅ Found order {id}"),
            None => info!("⚠️ Order {id} not found"),
        }

        Ok(order)
    }
}

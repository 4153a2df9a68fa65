use crate::{
    abstract_trait::order::repository::OrderCommandRepositoryTrait,
    model::order::{COLLECTION, NewOrder, Order as OrderModel, OrderPatch},
    repository::order::parse_object_id,
};
use async_trait::async_trait;
use mongodb::{
    Collection,
    bson::{DateTime, doc, oid::ObjectId},
    options::ReturnDocument,
};
use shared::{config::MongoDatabase, errors::RepositoryError};
use tracing::{error, info};

pub struct OrderCommandRepository {
    collection: Collection<OrderModel>,
}

impl OrderCommandRepository {
    pub fn new(db: &MongoDatabase) -> Self {
        Self {
            collection: db.collection(COLLECTION),
        }
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for OrderCommandRepository {
    async fn create_order(&self, req: &NewOrder) -> Result<OrderModel, RepositoryError> {
        let order = OrderModel::from_new(ObjectId::new(), req.clone(), DateTime::now());

        self.collection.insert_one(&order).await.map_err(|err| {
            error!("❌ Failed to create order {}: {err:?}", order.id);
            RepositoryError::from(err)
        })?;

        info!("✅ Created order {}", order.id);
        Ok(order)
    }

    async fn update_order(
        &self,
        id: &str,
        patch: &OrderPatch,
    ) -> Result<Option<OrderModel>, RepositoryError> {
        let oid = parse_object_id(id)?;

        let mut set = patch.to_set_document()?;
        set.insert("updatedAt", DateTime::now());

        let updated = self
            .collection
            .find_one_and_update(doc! { "_id": oid }, doc! { "$set": set, "$inc": { "__v": 1 } })
            .return_document(ReturnDocument::After)
            .await
            .map_err(|err| {
                error!("❌ Failed to update order {id}: {err:?}");
                RepositoryError::from(err)
            })?;

        if updated.is_some() {
            info!("✅ Updated order {id}");
        }

        Ok(updated)
    }

    async fn delete_order(&self, id: &str) -> Result<bool, RepositoryError> {
        let oid = parse_object_id(id)?;

        let deleted = self
            .collection
            .find_one_and_delete(doc! { "_id": oid })
            .await
            .map_err(|err| {
                error!("❌ Failed to delete order {id}: {err:?}");
                RepositoryError::from(err)
            })?;

        if deleted.is_some() {
            info!("🗑️ Deleted order {id}");
        }

        Ok(deleted.is_some())
    }
}

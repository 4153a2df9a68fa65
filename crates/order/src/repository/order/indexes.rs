use crate::model::order::{COLLECTION, INDEXED_FIELDS, Order as OrderModel};
use mongodb::{IndexModel, bson::Document};
use shared::{config::MongoDatabase, errors::RepositoryError};
use tracing::info;

/// Creates the secondary indexes of the orders collection when missing.
pub async fn ensure_indexes(db: &MongoDatabase) -> Result<(), RepositoryError> {
    let models: Vec<IndexModel> = INDEXED_FIELDS
        .iter()
        .map(|field| {
            let mut keys = Document::new();
            keys.insert(*field, 1);
            IndexModel::builder().keys(keys).build()
        })
        .collect();

    db.collection::<OrderModel>(COLLECTION)
        .create_indexes(models)
        .await?;

    info!("✅ Ensured indexes on {COLLECTION}: {INDEXED_FIELDS:?}");
    Ok(())
}

mod command;
mod indexes;
mod memory;
mod query;

pub use self::command::OrderCommandRepository;
pub use self::indexes::ensure_indexes;
pub use self::memory::MemoryOrderRepository;
pub use self::query::OrderQueryRepository;

use mongodb::bson::oid::ObjectId;
use shared::errors::RepositoryError;

pub(crate) fn parse_object_id(id: &str) -> Result<ObjectId, RepositoryError> {
    ObjectId::parse_str(id).map_err(|_| RepositoryError::InvalidId(id.to_string()))
}

use mongodb::bson::ser::Error as BsonSerError;
use mongodb::error::Error as MongoError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("{0}")]
    Mongo(#[from] MongoError),

    #[error("{0}")]
    Bson(#[from] BsonSerError),

    #[error("Cast to ObjectId failed for value \"{0}\" (type string) at path \"_id\"")]
    InvalidId(String),
}

mod database;
mod myconfig;

pub use self::database::{ConnectionManager, MongoDatabase};
pub use self::myconfig::{Config, StoreBackend};

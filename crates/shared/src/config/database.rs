use mongodb::{Client, Database, bson::doc};
use tracing::info;

pub type MongoDatabase = Database;

pub struct ConnectionManager;

impl ConnectionManager {
    pub async fn new_database(uri: &str, name: &str) -> anyhow::Result<MongoDatabase> {
        let client = Client::with_uri_str(uri)
            .await
            .map_err(|err| anyhow::anyhow!("Failed to create MongoDB client: {}", err))?;

        let database = client.database(name);

        // the driver connects lazily; fail startup if the deployment is unreachable
        database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|err| anyhow::anyhow!("Failed to reach MongoDB at startup: {}", err))?;

        info!("Connected to MongoDB database '{name}'");

        Ok(database)
    }
}

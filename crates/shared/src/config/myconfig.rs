use anyhow::{Context, Result, anyhow};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    Mongo { uri: String, database: String },
    Memory,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub store: StoreBackend,
    pub otel_endpoint: Option<String>,
    pub is_dev: bool,
    pub enable_file_log: bool,
    pub request_body_limit: usize,
}

impl Config {
    pub fn init() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = lookup("PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse::<u16>()
            .context("PORT must be a valid u16 integer")?;

        let store = match lookup("ORDER_STORE").as_deref().unwrap_or("mongo") {
            "mongo" => {
                let uri =
                    lookup("MONGO_URI").context("Missing environment variable: MONGO_URI")?;
                let database = lookup("MONGO_DB").unwrap_or_else(|| "orders".to_string());
                StoreBackend::Mongo { uri, database }
            }
            "memory" => StoreBackend::Memory,
            other => {
                return Err(anyhow!(
                    "ORDER_STORE must be 'mongo' or 'memory', got '{}'",
                    other
                ));
            }
        };

        let otel_endpoint = lookup("OTEL_ENDPOINT").filter(|v| !v.trim().is_empty());

        let is_dev = lookup("DEV_MODE")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);

        let enable_file_log = lookup("ENABLE_FILE_LOG")
            .map(|v| v == "true")
            .unwrap_or(false);

        let request_body_limit = lookup("REQUEST_BODY_LIMIT")
            .unwrap_or_else(|| (1024 * 1024).to_string())
            .parse::<usize>()
            .context("REQUEST_BODY_LIMIT must be a byte count")?;

        Ok(Self {
            port,
            store,
            otel_endpoint,
            is_dev,
            enable_file_log,
            request_body_limit,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_to_mongo_on_port_3000() {
        let config = config_from(&[("MONGO_URI", "mongodb://localhost:27017")]).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(
            config.store,
            StoreBackend::Mongo {
                uri: "mongodb://localhost:27017".into(),
                database: "orders".into(),
            }
        );
        assert!(config.otel_endpoint.is_none());
    }

    #[test]
    fn mongo_requires_uri() {
        let err = config_from(&[]).unwrap_err();
        assert!(err.to_string().contains("MONGO_URI"));
    }

    #[test]
    fn memory_store_needs_no_uri() {
        let config = config_from(&[("ORDER_STORE", "memory"), ("PORT", "8080")]).unwrap();
        assert_eq!(config.store, StoreBackend::Memory);
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn rejects_unknown_store_and_bad_port() {
        assert!(config_from(&[("ORDER_STORE", "redis")]).is_err());
        assert!(config_from(&[("ORDER_STORE", "memory"), ("PORT", "http")]).is_err());
    }
}

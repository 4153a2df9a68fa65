use crate::{
    di::{DependenciesInject, DependenciesInjectDeps},
    repository::order::MemoryOrderRepository,
};
use anyhow::{Context, Result};
use prometheus_client::registry::Registry;
use shared::config::{Config, ConnectionManager, StoreBackend};
use std::{fmt, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub registry: Arc<Mutex<Registry>>,
    pub body_limit: usize,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("deps", &self.di_container)
            .field("body_limit", &self.body_limit)
            .finish()
    }
}

impl AppState {
    pub async fn new(config: &Config) -> Result<Self> {
        let deps = match &config.store {
            StoreBackend::Mongo { uri, database } => DependenciesInjectDeps::Mongo(
                ConnectionManager::new_database(uri, database)
                    .await
                    .context("Failed to connect to MongoDB")?,
            ),
            StoreBackend::Memory => DependenciesInjectDeps::Memory(MemoryOrderRepository::new()),
        };

        Self::with_deps(deps, config.request_body_limit).await
    }

    /// State over a fresh in-memory store.
    pub async fn in_memory(body_limit: usize) -> Result<Self> {
        Self::with_deps(
            DependenciesInjectDeps::Memory(MemoryOrderRepository::new()),
            body_limit,
        )
        .await
    }

    async fn with_deps(deps: DependenciesInjectDeps, body_limit: usize) -> Result<Self> {
        let mut registry = Registry::default();

        let di_container = DependenciesInject::new(deps, &mut registry)
            .await
            .context("Failed to initialize dependency injection container")?;

        Ok(Self {
            di_container,
            registry: Arc::new(Mutex::new(registry)),
            body_limit,
        })
    }
}

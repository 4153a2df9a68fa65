use crate::{
    abstract_trait::order::{
        repository::{DynOrderCommandRepository, DynOrderQueryRepository},
        service::{DynOrderCommandService, DynOrderQueryService},
    },
    repository::order::{
        MemoryOrderRepository, OrderCommandRepository, OrderQueryRepository, ensure_indexes,
    },
    service::order::{OrderCommandService, OrderQueryService},
};
use anyhow::{Context, Result};
use prometheus_client::registry::Registry;
use shared::config::MongoDatabase;
use std::{fmt, sync::Arc};
use tracing::info;

#[derive(Clone)]
pub struct DependenciesInject {
    pub order_query: DynOrderQueryService,
    pub order_command: DynOrderCommandService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("order_query", &"OrderQueryService")
            .field("order_command", &"OrderCommandService")
            .finish()
    }
}

pub enum DependenciesInjectDeps {
    Mongo(MongoDatabase),
    Memory(MemoryOrderRepository),
}

impl DependenciesInject {
    pub async fn new(deps: DependenciesInjectDeps, registry: &mut Registry) -> Result<Self> {
        let (query_repo, command_repo): (DynOrderQueryRepository, DynOrderCommandRepository) =
            match deps {
                DependenciesInjectDeps::Mongo(db) => {
                    ensure_indexes(&db)
                        .await
                        .context("Failed to create order indexes")?;
                    (
                        Arc::new(OrderQueryRepository::new(&db)) as DynOrderQueryRepository,
                        Arc::new(OrderCommandRepository::new(&db)) as DynOrderCommandRepository,
                    )
                }
                DependenciesInjectDeps::Memory(repo) => {
                    info!("Using in-memory order store");
                    (
                        Arc::new(repo.clone()) as DynOrderQueryRepository,
                        Arc::new(repo) as DynOrderCommandRepository,
                    )
                }
            };

        let order_query =
            Arc::new(OrderQueryService::new(query_repo, registry)) as DynOrderQueryService;
        let order_command =
            Arc::new(OrderCommandService::new(command_repo, registry)) as DynOrderCommandService;

        Ok(Self {
            order_query,
            order_command,
        })
    }
}

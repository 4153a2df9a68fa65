use crate::{
    abstract_trait::order::{
        repository::DynOrderCommandRepository, service::OrderCommandServiceTrait,
    },
    domain::response::{order::OrderResponse, pagination::MessageResponse},
    model::order::{NewOrder, OrderPatch},
    service::order::{ORDER_DELETED, ORDER_NOT_FOUND},
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use shared::{
    errors::ServiceError,
    utils::{Method, Metrics, ServiceTracer, TracingContext},
};

#[derive(Clone)]
pub struct OrderCommandService {
    command: DynOrderCommandRepository,
    tracer: ServiceTracer,
}

impl OrderCommandService {
    pub fn new(command: DynOrderCommandRepository, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();
        metrics.register("order_command_service", registry);

        Self {
            command,
            tracer: ServiceTracer::new("order-command-service", metrics),
        }
    }

    fn fail(&self, ctx: &TracingContext, method: Method, err: ServiceError) -> ServiceError {
        self.tracer
            .complete_tracing_error(ctx, method, &err.to_string());
        err
    }
}

#[async_trait]
impl OrderCommandServiceTrait for OrderCommandService {
    async fn create_order(&self, req: NewOrder) -> Result<OrderResponse, ServiceError> {
        let method = Method::Post;
        let tracing_ctx = self.tracer.start_tracing(
            "create_order",
            vec![KeyValue::new("status", req.status.as_str())],
        );

        let order = self
            .command
            .create_order(&req)
            .await
            .map_err(|e| self.fail(&tracing_ctx, method.clone(), ServiceError::Repo(e)))?;

        self.tracer.complete_tracing_success(
            &tracing_ctx,
            method,
            &format!("Created order {}", order.id),
        );

        Ok(OrderResponse::from(order))
    }

    async fn update_order(
        &self,
        id: &str,
        patch: OrderPatch,
    ) -> Result<OrderResponse, ServiceError> {
        let method = Method::Put;
        let tracing_ctx = self
            .tracer
            .start_tracing("update_order", vec![KeyValue::new("order_id", id.to_string())]);

        let updated = self
            .command
            .update_order(id, &patch)
            .await
            .map_err(|e| self.fail(&tracing_ctx, method.clone(), ServiceError::Repo(e)))?;

        let Some(order) = updated else {
            return Err(self.fail(
                &tracing_ctx,
                method,
                ServiceError::NotFound(ORDER_NOT_FOUND.to_string()),
            ));
        };

        self.tracer.complete_tracing_success(
            &tracing_ctx,
            method,
            &format!("Updated order {id} to version {}", order.version),
        );

        Ok(OrderResponse::from(order))
    }

    async fn delete_order(&self, id: &str) -> Result<MessageResponse, ServiceError> {
        let method = Method::Delete;
        let tracing_ctx = self
            .tracer
            .start_tracing("delete_order", vec![KeyValue::new("order_id", id.to_string())]);

        let deleted = self
            .command
            .delete_order(id)
            .await
            .map_err(|e| self.fail(&tracing_ctx, method.clone(), ServiceError::Repo(e)))?;

        if !deleted {
            return Err(self.fail(
                &tracing_ctx,
                method,
                ServiceError::NotFound(ORDER_NOT_FOUND.to_string()),
            ));
        }

        self.tracer
            .complete_tracing_success(&tracing_ctx, method, &format!("Deleted order {id}"));

        Ok(MessageResponse::new(ORDER_DELETED))
    }
}

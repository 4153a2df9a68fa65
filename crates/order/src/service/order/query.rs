use crate::{
    abstract_trait::order::{repository::DynOrderQueryRepository, service::OrderQueryServiceTrait},
    domain::{
        requests::FindAllOrders,
        response::{order::OrderResponse, pagination::OrderPaginationResponse},
    },
    service::order::ORDER_NOT_FOUND,
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use shared::{
    errors::ServiceError,
    utils::{Method, Metrics, ServiceTracer},
};
use tracing::info;

#[derive(Clone)]
pub struct OrderQueryService {
    query: DynOrderQueryRepository,
    tracer: ServiceTracer,
}

impl OrderQueryService {
    pub fn new(query: DynOrderQueryRepository, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();
        metrics.register("order_query_service", registry);

        Self {
            query,
            tracer: ServiceTracer::new("order-query-service", metrics),
        }
    }
}

#[async_trait]
impl OrderQueryServiceTrait for OrderQueryService {
    async fn find_all(
        &self,
        req: &FindAllOrders,
    ) -> Result<OrderPaginationResponse, ServiceError> {
        let method = Method::Get;

        let tracing_ctx = self.tracer.start_tracing(
            "find_all",
            vec![
                KeyValue::new("page", req.page.clone().unwrap_or_default()),
                KeyValue::new("limit", req.limit.clone().unwrap_or_default()),
            ],
        );

        let pagination = match req.pagination() {
            Ok(p) => p,
            Err(e) => {
                self.tracer
                    .complete_tracing_error(&tracing_ctx, method, &e.to_string());
                return Err(e);
            }
        };

        info!(
            "📦 Finding all orders | Page: {}, Limit: {}",
            pagination.page, pagination.limit
        );

        let limit = i64::try_from(pagination.limit).unwrap_or(i64::MAX);

        let (orders, total) = match self.query.find_all(pagination.skip(), limit).await {
            Ok(res) => res,
            Err(e) => {
                self.tracer.complete_tracing_error(
                    &tracing_ctx,
                    method,
                    &format!("Failed to find orders: {e}"),
                );
                return Err(ServiceError::Repo(e));
            }
        };

        let response = OrderPaginationResponse {
            orders: orders.into_iter().map(OrderResponse::from).collect(),
            total_pages: pagination.total_pages(total),
            current_page: pagination.page,
        };

        self.tracer.complete_tracing_success(
            &tracing_ctx,
            method,
            &format!("Found {} orders (total: {total})", response.orders.len()),
        );

        Ok(response)
    }

    async fn find_by_id(&self, id: &str) -> Result<OrderResponse, ServiceError> {
        let method = Method::Get;

        let tracing_ctx = self
            .tracer
            .start_tracing("find_by_id", vec![KeyValue::new("order_id", id.to_string())]);

        match self.query.find_by_id(id).await {
            Ok(Some(order)) => {
                self.tracer.complete_tracing_success(
                    &tracing_ctx,
                    method,
                    &format!("Found order {id}"),
                );
                Ok(OrderResponse::from(order))
            }
            Ok(None) => {
                self.tracer.complete_tracing_error(
                    &tracing_ctx,
                    method,
                    &format!("Order {id} not found"),
                );
                Err(ServiceError::NotFound(ORDER_NOT_FOUND.to_string()))
            }
            Err(e) => {
                self.tracer.complete_tracing_error(
                    &tracing_ctx,
                    method,
                    &format!("Failed to fetch order {id}: {e}"),
                );
                Err(ServiceError::Repo(e))
            }
        }
    }
}

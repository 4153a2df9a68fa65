//! Runs against a live deployment when `MONGO_URI` is set; skipped otherwise.

use mongodb::bson::oid::ObjectId;
use order::{
    abstract_trait::order::repository::{OrderCommandRepositoryTrait, OrderQueryRepositoryTrait},
    model::order::{NewOrder, OrderPatch, OrderStatus},
    repository::order::{OrderCommandRepository, OrderQueryRepository, ensure_indexes},
};
use shared::{config::ConnectionManager, errors::RepositoryError};
use std::{
    io,
    sync::{Arc, Mutex},
};
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn new_order() -> NewOrder {
    NewOrder {
        customer_name: "Mongo Customer".into(),
        quantity: 1,
        product: "Product M".into(),
        unit_price: 12.5,
        has_delivery_fee: true,
        delivery_fee: 2.5,
        total: 15.0,
        status: OrderStatus::Pending,
    }
}

#[tokio::test]
async fn crud_round_trip_against_mongo() {
    let Ok(uri) = std::env::var("MONGO_URI") else {
        eprintln!("MONGO_URI not set, skipping");
        return;
    };

    let db_name = format!("orders_test_{}", ObjectId::new().to_hex());
    let db = ConnectionManager::new_database(&uri, &db_name)
        .await
        .unwrap();
    ensure_indexes(&db).await.unwrap();

    let query = OrderQueryRepository::new(&db);
    let command = OrderCommandRepository::new(&db);

    let created = command.create_order(&new_order()).await.unwrap();
    let id = created.id.to_hex();
    assert_eq!(created.version, 0);

    let fetched = query.find_by_id(&id).await.unwrap().unwrap();
    assert_eq!(fetched, created);

    let patch = OrderPatch {
        status: Some(OrderStatus::DeliveredAndUnpaid),
        ..Default::default()
    };
    let updated = command.update_order(&id, &patch).await.unwrap().unwrap();
    assert_eq!(updated.status, OrderStatus::DeliveredAndUnpaid);
    assert_eq!(updated.customer_name, "Mongo Customer");
    assert_eq!(updated.version, 1);
    assert_eq!(updated.created_at, created.created_at);

    let (orders, total) = query.find_all(0, 10).await.unwrap();
    assert_eq!(total, 1);
    assert_eq!(orders.len(), 1);

    assert!(command.delete_order(&id).await.unwrap());
    assert!(!command.delete_order(&id).await.unwrap());
    assert!(query.find_by_id(&id).await.unwrap().is_none());

    assert!(matches!(
        query.find_by_id("nope").await,
        Err(RepositoryError::InvalidId(_))
    ));

    db.drop().await.unwrap();
}

#[tokio::test]
async fn create_logs_the_order_id_without_customer_details() {
    let Ok(uri) = std::env::var("MONGO_URI") else {
        eprintln!("MONGO_URI not set, skipping");
        return;
    };

    let db_name = format!("orders_test_{}", ObjectId::new().to_hex());
    let db = ConnectionManager::new_database(&uri, &db_name)
        .await
        .unwrap();
    let command = OrderCommandRepository::new(&db);

    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_ansi(false)
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);

    let created = command.create_order(&new_order()).await.unwrap();
    drop(guard);

    let text = logs.text();
    assert!(text.contains(&created.id.to_hex()), "{text}");
    assert!(!text.contains("Mongo Customer"), "{text}");

    db.drop().await.unwrap();
}

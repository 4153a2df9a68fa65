use mongodb::bson::{self, DateTime, Document, oid::ObjectId};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

pub const COLLECTION: &str = "orders";

/// Fields carrying a secondary index on the collection.
pub const INDEXED_FIELDS: [&str; 2] = ["customerName", "status"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum OrderStatus {
    Pending,
    Done,
    #[serde(rename = "Delivered and Paid")]
    DeliveredAndPaid,
    #[serde(rename = "Delivered and Unpaid")]
    DeliveredAndUnpaid,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Done,
        OrderStatus::DeliveredAndPaid,
        OrderStatus::DeliveredAndUnpaid,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Done => "Done",
            OrderStatus::DeliveredAndPaid => "Delivered and Paid",
            OrderStatus::DeliveredAndUnpaid => "Delivered and Unpaid",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("'{s}' is not a valid order status"))
    }
}

/// Stored order document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub customer_name: String,
    pub quantity: i64,
    pub product: String,
    pub unit_price: f64,
    pub has_delivery_fee: bool,
    pub delivery_fee: f64,
    pub total: f64,
    pub status: OrderStatus,
    pub created_at: DateTime,
    pub updated_at: DateTime,
    #[serde(rename = "__v")]
    pub version: i64,
}

impl Order {
    pub fn from_new(id: ObjectId, new: NewOrder, now: DateTime) -> Self {
        Self {
            id,
            customer_name: new.customer_name,
            quantity: new.quantity,
            product: new.product,
            unit_price: new.unit_price,
            has_delivery_fee: new.has_delivery_fee,
            delivery_fee: new.delivery_fee,
            total: new.total,
            status: new.status,
            created_at: now,
            updated_at: now,
            version: 0,
        }
    }
}

/// A create payload that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub customer_name: String,
    pub quantity: i64,
    pub product: String,
    pub unit_price: f64,
    pub has_delivery_fee: bool,
    pub delivery_fee: f64,
    pub total: f64,
    pub status: OrderStatus,
}

/// A partial update that passed validation; absent fields stay untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_delivery_fee: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_fee: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
}

impl OrderPatch {
    pub fn is_empty(&self) -> bool {
        *self == OrderPatch::default()
    }

    /// The present fields as a `$set` body.
    pub fn to_set_document(&self) -> Result<Document, bson::ser::Error> {
        bson::to_document(self)
    }

    pub fn apply(&self, order: &mut Order) {
        if let Some(customer_name) = &self.customer_name {
            order.customer_name = customer_name.clone();
        }
        if let Some(quantity) = self.quantity {
            order.quantity = quantity;
        }
        if let Some(product) = &self.product {
            order.product = product.clone();
        }
        if let Some(unit_price) = self.unit_price {
            order.unit_price = unit_price;
        }
        if let Some(has_delivery_fee) = self.has_delivery_fee {
            order.has_delivery_fee = has_delivery_fee;
        }
        if let Some(delivery_fee) = self.delivery_fee {
            order.delivery_fee = delivery_fee;
        }
        if let Some(total) = self.total {
            order.total = total;
        }
        if let Some(status) = self.status {
            order.status = status;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NewOrder {
        NewOrder {
            customer_name: "John Doe".into(),
            quantity: 2,
            product: "Product A".into(),
            unit_price: 50.0,
            has_delivery_fee: true,
            delivery_fee: 10.0,
            total: 110.0,
            status: OrderStatus::Pending,
        }
    }

    #[test]
    fn status_literals_round_trip_through_from_str() {
        for status in OrderStatus::ALL {
            assert_eq!(status.as_str().parse::<OrderStatus>(), Ok(status));
        }
        assert!("Invalid Status".parse::<OrderStatus>().is_err());
        assert!("pending".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn status_serializes_to_wire_literal() {
        let json = serde_json::to_string(&OrderStatus::DeliveredAndUnpaid).unwrap();
        assert_eq!(json, "\"Delivered and Unpaid\"");
    }

    #[test]
    fn stored_document_uses_mongo_field_names() {
        let order = Order::from_new(ObjectId::new(), sample(), DateTime::now());
        let doc = bson::to_document(&order).unwrap();

        assert!(doc.contains_key("_id"));
        assert!(doc.contains_key("__v"));
        assert!(doc.contains_key("customerName"));
        assert!(doc.contains_key("hasDeliveryFee"));
        assert!(doc.contains_key("createdAt"));
        assert_eq!(doc.get_str("status").unwrap(), "Pending");
        assert_eq!(order.version, 0);
        assert_eq!(order.created_at, order.updated_at);
    }

    #[test]
    fn patch_sets_only_present_fields() {
        let patch = OrderPatch {
            status: Some(OrderStatus::Done),
            total: Some(99.5),
            ..Default::default()
        };

        let set = patch.to_set_document().unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.get_str("status").unwrap(), "Done");
        assert_eq!(set.get_f64("total").unwrap(), 99.5);

        let mut order = Order::from_new(ObjectId::new(), sample(), DateTime::now());
        patch.apply(&mut order);
        assert_eq!(order.status, OrderStatus::Done);
        assert_eq!(order.total, 99.5);
        assert_eq!(order.customer_name, "John Doe");
        assert_eq!(order.quantity, 2);
    }

    #[test]
    fn empty_patch() {
        assert!(OrderPatch::default().is_empty());
        assert!(OrderPatch::default().to_set_document().unwrap().is_empty());
    }
}

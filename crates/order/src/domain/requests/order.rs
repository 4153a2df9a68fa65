use crate::{
    domain::requests::validation::{
        ValidatedPayload, boolean, collect, integer_at_least, non_negative_number, one_of,
        optional, present, required, text,
    },
    model::order::{NewOrder, OrderPatch, OrderStatus},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared::errors::ServiceError;
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationErrors};

pub const CUSTOMER_NAME_REQUIRED: &str = "Customer name is required";
pub const CUSTOMER_NAME_STRING: &str = "Customer name must be a string";
pub const QUANTITY_INVALID: &str = "Quantity must be an integer greater than 0";
pub const PRODUCT_REQUIRED: &str = "Product name is required";
pub const PRODUCT_STRING: &str = "Product name must be a string";
pub const UNIT_PRICE_INVALID: &str = "Unit price must be a positive number";
pub const HAS_DELIVERY_FEE_INVALID: &str = "hasDeliveryFee must be a boolean";
pub const DELIVERY_FEE_INVALID: &str = "Delivery fee must be a positive number";
pub const TOTAL_INVALID: &str = "Total must be a positive number";
pub const STATUS_INVALID: &str =
    "Status must be either Pending, Done, Delivered and Paid, or Delivered and Unpaid";

const ORDER_FIELDS: &[&str] = &[
    "customerName",
    "quantity",
    "product",
    "unitPrice",
    "hasDeliveryFee",
    "deliveryFee",
    "total",
    "status",
];

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 10;

fn parse_status(s: &str) -> Option<OrderStatus> {
    s.parse().ok()
}

/// Query string of `GET /api/orders`. Values stay raw until the service
/// interprets them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
pub struct FindAllOrders {
    /// 1-based page number, default 1
    pub page: Option<String>,
    /// Page size, default 10
    pub limit: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u64,
    pub limit: u64,
}

impl Pagination {
    pub fn skip(&self) -> u64 {
        (self.page - 1).saturating_mul(self.limit)
    }

    pub fn total_pages(&self, total: u64) -> u64 {
        total.div_ceil(self.limit)
    }
}

impl FindAllOrders {
    pub fn pagination(&self) -> Result<Pagination, ServiceError> {
        let page = parse_positive("page", self.page.as_deref(), DEFAULT_PAGE)?;
        let limit = parse_positive("limit", self.limit.as_deref(), DEFAULT_LIMIT)?;
        Ok(Pagination { page, limit })
    }
}

fn parse_positive(name: &str, raw: Option<&str>, default: u64) -> Result<u64, ServiceError> {
    let Some(raw) = raw else {
        return Ok(default);
    };

    match raw.trim().parse::<u64>() {
        Ok(value) if value >= 1 => Ok(value),
        _ => Err(ServiceError::InvalidQuery(format!(
            "{name} must be a positive integer, got '{raw}'"
        ))),
    }
}

/// Body of `POST /api/orders`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = String, example = "John Doe")]
    pub customer_name: Option<Value>,

    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = i64, minimum = 1, example = 2)]
    pub quantity: Option<Value>,

    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = String, example = "Product A")]
    pub product: Option<Value>,

    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = f64, minimum = 0, example = 50)]
    pub unit_price: Option<Value>,

    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = bool)]
    pub has_delivery_fee: Option<Value>,

    /// Stored as 0 when omitted
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<f64>, minimum = 0)]
    pub delivery_fee: Option<Value>,

    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = f64, minimum = 0, example = 110)]
    pub total: Option<Value>,

    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = OrderStatus)]
    pub status: Option<Value>,
}

impl ValidatedPayload for CreateOrderRequest {
    type Output = NewOrder;
    const FIELDS: &'static [&'static str] = ORDER_FIELDS;

    fn parse(&self) -> Result<NewOrder, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let customer_name = collect(
            &mut errors,
            "customerName",
            required(&self.customer_name, CUSTOMER_NAME_REQUIRED)
                .and_then(|v| text(v, CUSTOMER_NAME_REQUIRED, CUSTOMER_NAME_STRING)),
        );
        let quantity = collect(
            &mut errors,
            "quantity",
            required(&self.quantity, QUANTITY_INVALID)
                .and_then(|v| integer_at_least(v, 1, QUANTITY_INVALID)),
        );
        let product = collect(
            &mut errors,
            "product",
            required(&self.product, PRODUCT_REQUIRED)
                .and_then(|v| text(v, PRODUCT_REQUIRED, PRODUCT_STRING)),
        );
        let unit_price = collect(
            &mut errors,
            "unitPrice",
            required(&self.unit_price, UNIT_PRICE_INVALID)
                .and_then(|v| non_negative_number(v, UNIT_PRICE_INVALID)),
        );
        let has_delivery_fee = collect(
            &mut errors,
            "hasDeliveryFee",
            required(&self.has_delivery_fee, HAS_DELIVERY_FEE_INVALID)
                .and_then(|v| boolean(v, HAS_DELIVERY_FEE_INVALID)),
        );
        let delivery_fee = collect(
            &mut errors,
            "deliveryFee",
            optional(&self.delivery_fee, |v| {
                non_negative_number(v, DELIVERY_FEE_INVALID)
            }),
        );
        let total = collect(
            &mut errors,
            "total",
            required(&self.total, TOTAL_INVALID)
                .and_then(|v| non_negative_number(v, TOTAL_INVALID)),
        );
        let status = collect(
            &mut errors,
            "status",
            required(&self.status, STATUS_INVALID)
                .and_then(|v| one_of(v, parse_status, STATUS_INVALID)),
        );

        let (
            Some(customer_name),
            Some(quantity),
            Some(product),
            Some(unit_price),
            Some(has_delivery_fee),
            Some(delivery_fee),
            Some(total),
            Some(status),
        ) = (
            customer_name,
            quantity,
            product,
            unit_price,
            has_delivery_fee,
            delivery_fee,
            total,
            status,
        )
        else {
            return Err(errors);
        };

        Ok(NewOrder {
            customer_name,
            quantity,
            product,
            unit_price,
            has_delivery_fee,
            delivery_fee: delivery_fee.unwrap_or(0.0),
            total,
            status,
        })
    }
}

impl Validate for CreateOrderRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        self.parse().map(|_| ())
    }
}

/// Body of `PUT /api/orders/{id}`; every field optional.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderRequest {
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub customer_name: Option<Value>,

    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<i64>, minimum = 1)]
    pub quantity: Option<Value>,

    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub product: Option<Value>,

    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<f64>, minimum = 0)]
    pub unit_price: Option<Value>,

    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<bool>)]
    pub has_delivery_fee: Option<Value>,

    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<f64>, minimum = 0)]
    pub delivery_fee: Option<Value>,

    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<f64>, minimum = 0)]
    pub total: Option<Value>,

    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<OrderStatus>)]
    pub status: Option<Value>,
}

impl ValidatedPayload for UpdateOrderRequest {
    type Output = OrderPatch;
    const FIELDS: &'static [&'static str] = ORDER_FIELDS;

    fn parse(&self) -> Result<OrderPatch, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let customer_name = collect(
            &mut errors,
            "customerName",
            optional(&self.customer_name, |v| {
                text(v, CUSTOMER_NAME_REQUIRED, CUSTOMER_NAME_STRING)
            }),
        );
        let quantity = collect(
            &mut errors,
            "quantity",
            optional(&self.quantity, |v| integer_at_least(v, 1, QUANTITY_INVALID)),
        );
        let product = collect(
            &mut errors,
            "product",
            optional(&self.product, |v| text(v, PRODUCT_REQUIRED, PRODUCT_STRING)),
        );
        let unit_price = collect(
            &mut errors,
            "unitPrice",
            optional(&self.unit_price, |v| {
                non_negative_number(v, UNIT_PRICE_INVALID)
            }),
        );
        let has_delivery_fee = collect(
            &mut errors,
            "hasDeliveryFee",
            optional(&self.has_delivery_fee, |v| {
                boolean(v, HAS_DELIVERY_FEE_INVALID)
            }),
        );
        let delivery_fee = collect(
            &mut errors,
            "deliveryFee",
            optional(&self.delivery_fee, |v| {
                non_negative_number(v, DELIVERY_FEE_INVALID)
            }),
        );
        let total = collect(
            &mut errors,
            "total",
            optional(&self.total, |v| non_negative_number(v, TOTAL_INVALID)),
        );
        let status = collect(
            &mut errors,
            "status",
            optional(&self.status, |v| one_of(v, parse_status, STATUS_INVALID)),
        );

        if !errors.errors().is_empty() {
            return Err(errors);
        }

        Ok(OrderPatch {
            customer_name: customer_name.flatten(),
            quantity: quantity.flatten(),
            product: product.flatten(),
            unit_price: unit_price.flatten(),
            has_delivery_fee: has_delivery_fee.flatten(),
            delivery_fee: delivery_fee.flatten(),
            total: total.flatten(),
            status: status.flatten(),
        })
    }
}

impl Validate for UpdateOrderRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        self.parse().map(|_| ())
    }
}

pub mod order;
pub mod validation;

pub use self::order::{CreateOrderRequest, FindAllOrders, UpdateOrderRequest};

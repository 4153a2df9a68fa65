mod command;
mod query;

pub use self::command::OrderCommandService;
pub use self::query::OrderQueryService;

pub const ORDER_NOT_FOUND: &str = "Order not found";
pub const ORDER_DELETED: &str = "Order successfully deleted";

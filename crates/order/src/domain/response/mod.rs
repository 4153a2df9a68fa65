pub mod order;
pub mod pagination;

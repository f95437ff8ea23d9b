pub mod store;
pub mod validate;
pub mod pagination;
pub mod customer;
pub mod category;
pub mod cargo_type;
pub mod order;
pub mod cargo;

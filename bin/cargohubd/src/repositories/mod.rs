//! Query functions working on a single connection.
//! They are composed by `utils` into blocking jobs or transactions.

pub mod customer;
pub mod category;
pub mod cargo_type;
pub mod order;
pub mod cargo;
pub mod cargo_order;

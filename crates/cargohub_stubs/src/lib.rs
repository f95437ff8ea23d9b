pub mod config;
pub mod generic;
pub mod system;

pub mod cargo;
pub mod cargo_type;
pub mod category;
pub mod customer;
pub mod order;

use ntex::web;

pub mod list;
pub mod inspect;

pub use list::*;
pub use inspect::*;

pub fn ntex_config(config: &mut web::ServiceConfig) {
  config.service(list_customer);
  config.service(inspect_customer);
}

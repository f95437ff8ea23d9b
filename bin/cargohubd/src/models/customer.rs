use diesel::prelude::*;

use cargohub_stubs::customer::Customer;

use crate::schema::customers;

/// A customer row. Customers are managed by another service,
/// the daemon only reads them.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = customers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CustomerDb {
  pub id: i32,
  pub name: String,
  pub email: Option<String>,
  pub phone: Option<String>,
  pub company: Option<String>,
  pub address: Option<String>,
  pub created_at: chrono::NaiveDateTime,
  pub updated_at: chrono::NaiveDateTime,
}

impl From<CustomerDb> for Customer {
  fn from(db: CustomerDb) -> Self {
    Self {
      id: db.id,
      name: db.name,
      email: db.email,
      phone: db.phone,
      company: db.company,
      address: db.address,
      created_at: db.created_at,
      updated_at: db.updated_at,
    }
  }
}

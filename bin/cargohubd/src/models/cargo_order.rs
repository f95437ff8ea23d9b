use diesel::prelude::*;

use crate::schema::cargo_orders;

/// Link between a cargo and one of its orders
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = cargo_orders)]
pub struct CargoOrderInsertDb {
  pub cargo_id: i32,
  pub order_id: i32,
  pub created_at: chrono::NaiveDateTime,
  pub updated_at: chrono::NaiveDateTime,
}

impl CargoOrderInsertDb {
  pub fn new(cargo_id: i32, order_id: i32) -> Self {
    let now = chrono::Utc::now().naive_utc();
    Self {
      cargo_id,
      order_id,
      created_at: now,
      updated_at: now,
    }
  }
}

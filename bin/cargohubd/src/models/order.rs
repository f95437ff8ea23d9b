use diesel::prelude::*;

use cargohub_stubs::order::{Order, OrderItem};

use crate::schema::{orders, order_items};

/// An order row, read only from the daemon point of view
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = orders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderDb {
  pub id: i32,
  pub customer_id: Option<i32>,
  pub order_no: Option<String>,
  pub status: String,
  pub note: Option<String>,
  pub created_at: chrono::NaiveDateTime,
  pub updated_at: chrono::NaiveDateTime,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(belongs_to(OrderDb, foreign_key = order_id))]
#[diesel(table_name = order_items)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderItemDb {
  pub id: i32,
  pub order_id: i32,
  pub category_id: Option<i32>,
  pub name: String,
  pub quantity: i32,
  pub unit: Option<String>,
  pub note: Option<String>,
  pub created_at: chrono::NaiveDateTime,
  pub updated_at: chrono::NaiveDateTime,
}

impl From<OrderDb> for Order {
  fn from(db: OrderDb) -> Self {
    Self {
      id: db.id,
      customer_id: db.customer_id,
      order_no: db.order_no,
      status: db.status,
      note: db.note,
      created_at: db.created_at,
      updated_at: db.updated_at,
    }
  }
}

impl From<OrderItemDb> for OrderItem {
  fn from(db: OrderItemDb) -> Self {
    Self {
      id: db.id,
      order_id: db.order_id,
      category_id: db.category_id,
      name: db.name,
      quantity: db.quantity,
      unit: db.unit,
      note: db.note,
      created_at: db.created_at,
      updated_at: db.updated_at,
    }
  }
}

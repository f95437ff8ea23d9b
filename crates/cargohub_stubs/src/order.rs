#[cfg(feature = "serde")]
use serde::{Serialize, Deserialize};

/// A customer order, owned by the order management side.
/// Cargoes only reference it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Order {
  pub id: i32,
  pub customer_id: Option<i32>,
  pub order_no: Option<String>,
  pub status: String,
  pub note: Option<String>,
  pub created_at: chrono::NaiveDateTime,
  pub updated_at: chrono::NaiveDateTime,
}

/// A line of an order
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrderItem {
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

/// Detailed view of an order
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrderInspect {
  #[cfg_attr(feature = "serde", serde(flatten))]
  pub order: Order,
  pub items: Vec<OrderItem>,
}

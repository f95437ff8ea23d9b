#[cfg(feature = "serde")]
use serde::{Serialize, Deserialize};

use crate::{
  cargo_type::CargoType,
  customer::Customer,
  order::{Order, OrderItem},
};

/// A cargo is a shipment grouping one or more customer orders
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cargo {
  pub id: i32,
  pub customer_id: Option<i32>,
  pub cargo_type_id: Option<i32>,
  /// Carrier reference of the shipment
  pub cargo_no: Option<String>,
  pub pickup_date: Option<chrono::NaiveDate>,
  pub departure_date: Option<chrono::NaiveDate>,
  pub eta_date: Option<chrono::NaiveDate>,
  /// Tracking link or tracking number given by the carrier
  pub tracking: Option<String>,
  pub tracking_remark: Option<String>,
  pub note: Option<String>,
  /// Free text status, `Open` when created without one
  pub status: String,
  pub shipped_at: Option<chrono::NaiveDateTime>,
  pub created_at: chrono::NaiveDateTime,
  pub updated_at: chrono::NaiveDateTime,
}

/// Payload used to create a cargo.
/// Server managed fields (id and timestamps) are ignored when sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CargoPartial {
  #[cfg_attr(
    feature = "serde",
    serde(default, skip_serializing_if = "Option::is_none")
  )]
  pub customer_id: Option<i32>,
  #[cfg_attr(
    feature = "serde",
    serde(default, skip_serializing_if = "Option::is_none")
  )]
  pub cargo_type_id: Option<i32>,
  #[cfg_attr(
    feature = "serde",
    serde(default, skip_serializing_if = "Option::is_none")
  )]
  pub cargo_no: Option<String>,
  #[cfg_attr(
    feature = "serde",
    serde(default, skip_serializing_if = "Option::is_none")
  )]
  pub pickup_date: Option<chrono::NaiveDate>,
  #[cfg_attr(
    feature = "serde",
    serde(default, skip_serializing_if = "Option::is_none")
  )]
  pub departure_date: Option<chrono::NaiveDate>,
  #[cfg_attr(
    feature = "serde",
    serde(default, skip_serializing_if = "Option::is_none")
  )]
  pub eta_date: Option<chrono::NaiveDate>,
  #[cfg_attr(
    feature = "serde",
    serde(default, skip_serializing_if = "Option::is_none")
  )]
  pub tracking: Option<String>,
  #[cfg_attr(
    feature = "serde",
    serde(default, skip_serializing_if = "Option::is_none")
  )]
  pub tracking_remark: Option<String>,
  #[cfg_attr(
    feature = "serde",
    serde(default, skip_serializing_if = "Option::is_none")
  )]
  pub note: Option<String>,
  #[cfg_attr(
    feature = "serde",
    serde(default, skip_serializing_if = "Option::is_none")
  )]
  pub status: Option<String>,
  #[cfg_attr(
    feature = "serde",
    serde(default, skip_serializing_if = "Option::is_none")
  )]
  pub shipped_at: Option<chrono::NaiveDateTime>,
  /// Orders to assign right after creation
  #[cfg_attr(
    feature = "serde",
    serde(default, skip_serializing_if = "Option::is_none")
  )]
  pub orders: Option<Vec<i32>>,
}

/// Payload used to update a cargo.
/// Omitted fields are left untouched, a present `orders` list
/// replaces every current assignment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CargoUpdate {
  #[cfg_attr(
    feature = "serde",
    serde(default, skip_serializing_if = "Option::is_none")
  )]
  pub customer_id: Option<i32>,
  #[cfg_attr(
    feature = "serde",
    serde(default, skip_serializing_if = "Option::is_none")
  )]
  pub cargo_type_id: Option<i32>,
  #[cfg_attr(
    feature = "serde",
    serde(default, skip_serializing_if = "Option::is_none")
  )]
  pub cargo_no: Option<String>,
  #[cfg_attr(
    feature = "serde",
    serde(default, skip_serializing_if = "Option::is_none")
  )]
  pub pickup_date: Option<chrono::NaiveDate>,
  #[cfg_attr(
    feature = "serde",
    serde(default, skip_serializing_if = "Option::is_none")
  )]
  pub departure_date: Option<chrono::NaiveDate>,
  #[cfg_attr(
    feature = "serde",
    serde(default, skip_serializing_if = "Option::is_none")
  )]
  pub eta_date: Option<chrono::NaiveDate>,
  #[cfg_attr(
    feature = "serde",
    serde(default, skip_serializing_if = "Option::is_none")
  )]
  pub tracking: Option<String>,
  #[cfg_attr(
    feature = "serde",
    serde(default, skip_serializing_if = "Option::is_none")
  )]
  pub tracking_remark: Option<String>,
  #[cfg_attr(
    feature = "serde",
    serde(default, skip_serializing_if = "Option::is_none")
  )]
  pub note: Option<String>,
  #[cfg_attr(
    feature = "serde",
    serde(default, skip_serializing_if = "Option::is_none")
  )]
  pub status: Option<String>,
  #[cfg_attr(
    feature = "serde",
    serde(default, skip_serializing_if = "Option::is_none")
  )]
  pub shipped_at: Option<chrono::NaiveDateTime>,
  #[cfg_attr(
    feature = "serde",
    serde(default, skip_serializing_if = "Option::is_none")
  )]
  pub orders: Option<Vec<i32>>,
}

/// Orders currently assigned to a cargo with their items
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CargoOrders {
  pub orders: Vec<Order>,
  pub order_items: Vec<OrderItem>,
}

/// Detailed view of a cargo
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CargoInspect {
  #[cfg_attr(feature = "serde", serde(flatten))]
  pub cargo: Cargo,
  #[cfg_attr(
    feature = "serde",
    serde(default, skip_serializing_if = "Option::is_none")
  )]
  pub cargo_type: Option<CargoType>,
  #[cfg_attr(
    feature = "serde",
    serde(default, skip_serializing_if = "Option::is_none")
  )]
  pub customer: Option<Customer>,
  #[cfg_attr(feature = "serde", serde(flatten))]
  pub assignments: CargoOrders,
}

/// Payload used to assign orders to a cargo
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CargoAssignOrders {
  pub order_ids: Vec<i32>,
}

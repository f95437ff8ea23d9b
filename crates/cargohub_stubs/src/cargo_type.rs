#[cfg(feature = "serde")]
use serde::{Serialize, Deserialize};

/// Kind of transport a cargo uses (sea freight, air freight, ...)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CargoType {
  pub id: i32,
  /// Label of the type
  #[cfg_attr(feature = "serde", serde(rename = "type"))]
  pub type_name: String,
  /// Usual transit duration in days
  pub duration: Option<i32>,
  pub created_at: chrono::NaiveDateTime,
  pub updated_at: chrono::NaiveDateTime,
}

/// Payload used to create a cargo type
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CargoTypePartial {
  #[cfg_attr(feature = "serde", serde(rename = "type"))]
  pub type_name: String,
  #[cfg_attr(
    feature = "serde",
    serde(default, skip_serializing_if = "Option::is_none")
  )]
  pub duration: Option<i32>,
}

/// Payload used to update a cargo type
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CargoTypeUpdate {
  #[cfg_attr(
    feature = "serde",
    serde(rename = "type", default, skip_serializing_if = "Option::is_none")
  )]
  pub type_name: Option<String>,
  #[cfg_attr(
    feature = "serde",
    serde(default, skip_serializing_if = "Option::is_none")
  )]
  pub duration: Option<i32>,
}

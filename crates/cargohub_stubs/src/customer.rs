#[cfg(feature = "serde")]
use serde::{Serialize, Deserialize};

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Customer {
  pub id: i32,
  pub name: String,
  pub email: Option<String>,
  pub phone: Option<String>,
  pub company: Option<String>,
  pub address: Option<String>,
  pub created_at: chrono::NaiveDateTime,
  pub updated_at: chrono::NaiveDateTime,
}

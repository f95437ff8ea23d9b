use diesel::prelude::*;

use cargohub_stubs::cargo::{Cargo, CargoPartial, CargoUpdate};

use crate::schema::cargos;

/// Status given to a cargo created without one
pub const DEFAULT_CARGO_STATUS: &str = "Open";

/// A cargo row as stored in the database
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = cargos)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CargoDb {
  pub id: i32,
  pub customer_id: Option<i32>,
  pub cargo_type_id: Option<i32>,
  pub cargo_no: Option<String>,
  pub pickup_date: Option<chrono::NaiveDate>,
  pub departure_date: Option<chrono::NaiveDate>,
  pub eta_date: Option<chrono::NaiveDate>,
  pub tracking: Option<String>,
  pub tracking_remark: Option<String>,
  pub note: Option<String>,
  pub status: String,
  pub shipped_at: Option<chrono::NaiveDateTime>,
  pub created_at: chrono::NaiveDateTime,
  pub updated_at: chrono::NaiveDateTime,
}

/// Insertable cargo, id and timestamps are never taken from the client
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = cargos)]
pub struct CargoInsertDb {
  pub customer_id: Option<i32>,
  pub cargo_type_id: Option<i32>,
  pub cargo_no: Option<String>,
  pub pickup_date: Option<chrono::NaiveDate>,
  pub departure_date: Option<chrono::NaiveDate>,
  pub eta_date: Option<chrono::NaiveDate>,
  pub tracking: Option<String>,
  pub tracking_remark: Option<String>,
  pub note: Option<String>,
  pub status: String,
  pub shipped_at: Option<chrono::NaiveDateTime>,
  pub created_at: chrono::NaiveDateTime,
  pub updated_at: chrono::NaiveDateTime,
}

/// Partial merge of a cargo: a `None` column keeps its current value
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = cargos)]
pub struct CargoUpdateDb {
  pub customer_id: Option<i32>,
  pub cargo_type_id: Option<i32>,
  pub cargo_no: Option<String>,
  pub pickup_date: Option<chrono::NaiveDate>,
  pub departure_date: Option<chrono::NaiveDate>,
  pub eta_date: Option<chrono::NaiveDate>,
  pub tracking: Option<String>,
  pub tracking_remark: Option<String>,
  pub note: Option<String>,
  pub status: Option<String>,
  pub shipped_at: Option<chrono::NaiveDateTime>,
  pub updated_at: chrono::NaiveDateTime,
}

impl From<&CargoPartial> for CargoInsertDb {
  fn from(p: &CargoPartial) -> Self {
    let now = chrono::Utc::now().naive_utc();
    let status = p
      .status
      .as_deref()
      .map(str::trim)
      .filter(|status| !status.is_empty())
      .unwrap_or(DEFAULT_CARGO_STATUS)
      .to_owned();
    Self {
      customer_id: p.customer_id,
      cargo_type_id: p.cargo_type_id,
      cargo_no: p.cargo_no.clone(),
      pickup_date: p.pickup_date,
      departure_date: p.departure_date,
      eta_date: p.eta_date,
      tracking: p.tracking.clone(),
      tracking_remark: p.tracking_remark.clone(),
      note: p.note.clone(),
      status,
      shipped_at: p.shipped_at,
      created_at: now,
      updated_at: now,
    }
  }
}

impl From<&CargoUpdate> for CargoUpdateDb {
  fn from(p: &CargoUpdate) -> Self {
    Self {
      customer_id: p.customer_id,
      cargo_type_id: p.cargo_type_id,
      cargo_no: p.cargo_no.clone(),
      pickup_date: p.pickup_date,
      departure_date: p.departure_date,
      eta_date: p.eta_date,
      tracking: p.tracking.clone(),
      tracking_remark: p.tracking_remark.clone(),
      note: p.note.clone(),
      status: p.status.clone(),
      shipped_at: p.shipped_at,
      updated_at: chrono::Utc::now().naive_utc(),
    }
  }
}

impl From<CargoDb> for Cargo {
  fn from(db: CargoDb) -> Self {
    Self {
      id: db.id,
      customer_id: db.customer_id,
      cargo_type_id: db.cargo_type_id,
      cargo_no: db.cargo_no,
      pickup_date: db.pickup_date,
      departure_date: db.departure_date,
      eta_date: db.eta_date,
      tracking: db.tracking,
      tracking_remark: db.tracking_remark,
      note: db.note,
      status: db.status,
      shipped_at: db.shipped_at,
      created_at: db.created_at,
      updated_at: db.updated_at,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn status_defaults_to_open() {
    let item = CargoInsertDb::from(&CargoPartial::default());
    assert_eq!(item.status, DEFAULT_CARGO_STATUS);
    let item = CargoInsertDb::from(&CargoPartial {
      status: Some("  ".to_owned()),
      ..Default::default()
    });
    assert_eq!(item.status, DEFAULT_CARGO_STATUS);
    let item = CargoInsertDb::from(&CargoPartial {
      status: Some("Shipped".to_owned()),
      ..Default::default()
    });
    assert_eq!(item.status, "Shipped");
  }

  #[test]
  fn update_keeps_omitted_fields_out() {
    let update = CargoUpdateDb::from(&CargoUpdate {
      note: Some("fragile".to_owned()),
      orders: Some(vec![1]),
      ..Default::default()
    });
    assert_eq!(update.note.as_deref(), Some("fragile"));
    assert!(update.cargo_no.is_none());
    assert!(update.status.is_none());
  }
}

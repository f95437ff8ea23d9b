use diesel::prelude::*;

use cargohub_stubs::cargo_type::{CargoType, CargoTypePartial, CargoTypeUpdate};

use crate::schema::cargo_types;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = cargo_types)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CargoTypeDb {
  pub id: i32,
  pub type_name: String,
  pub duration: Option<i32>,
  pub created_at: chrono::NaiveDateTime,
  pub updated_at: chrono::NaiveDateTime,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = cargo_types)]
pub struct CargoTypeInsertDb {
  pub type_name: String,
  pub duration: Option<i32>,
  pub created_at: chrono::NaiveDateTime,
  pub updated_at: chrono::NaiveDateTime,
}

#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = cargo_types)]
pub struct CargoTypeUpdateDb {
  pub type_name: Option<String>,
  pub duration: Option<i32>,
  pub updated_at: chrono::NaiveDateTime,
}

impl From<&CargoTypePartial> for CargoTypeInsertDb {
  fn from(p: &CargoTypePartial) -> Self {
    let now = chrono::Utc::now().naive_utc();
    Self {
      type_name: p.type_name.trim().to_owned(),
      duration: p.duration,
      created_at: now,
      updated_at: now,
    }
  }
}

impl From<&CargoTypeUpdate> for CargoTypeUpdateDb {
  fn from(p: &CargoTypeUpdate) -> Self {
    Self {
      type_name: p.type_name.as_ref().map(|name| name.trim().to_owned()),
      duration: p.duration,
      updated_at: chrono::Utc::now().naive_utc(),
    }
  }
}

impl From<CargoTypeDb> for CargoType {
  fn from(db: CargoTypeDb) -> Self {
    Self {
      id: db.id,
      type_name: db.type_name,
      duration: db.duration,
      created_at: db.created_at,
      updated_at: db.updated_at,
    }
  }
}

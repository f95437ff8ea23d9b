//! Repository of the cargo_types table
use diesel::prelude::*;

use cargohub_error::io::{IoResult, FromIo};

use crate::schema::cargo_types;
use crate::models::{CargoTypeDb, CargoTypeInsertDb, CargoTypeUpdateDb};

pub fn list(conn: &mut PgConnection) -> IoResult<Vec<CargoTypeDb>> {
  let items = cargo_types::table
    .order(cargo_types::type_name.asc())
    .load::<CargoTypeDb>(conn)
    .map_err(|err| err.map_err_context(|| "CargoType"))?;
  Ok(items)
}

pub fn find_by_id(conn: &mut PgConnection, id: i32) -> IoResult<CargoTypeDb> {
  let item = cargo_types::table
    .find(id)
    .get_result::<CargoTypeDb>(conn)
    .map_err(|err| err.map_err_context(|| "CargoType"))?;
  Ok(item)
}

pub fn find_optional(
  conn: &mut PgConnection,
  id: Option<i32>,
) -> IoResult<Option<CargoTypeDb>> {
  let Some(id) = id else {
    return Ok(None);
  };
  let item = cargo_types::table
    .find(id)
    .get_result::<CargoTypeDb>(conn)
    .optional()
    .map_err(|err| err.map_err_context(|| "CargoType"))?;
  Ok(item)
}

pub fn create(
  conn: &mut PgConnection,
  item: &CargoTypeInsertDb,
) -> IoResult<CargoTypeDb> {
  let item = diesel::insert_into(cargo_types::table)
    .values(item)
    .get_result::<CargoTypeDb>(conn)
    .map_err(|err| err.map_err_context(|| "CargoType"))?;
  Ok(item)
}

pub fn update_by_id(
  conn: &mut PgConnection,
  id: i32,
  item: &CargoTypeUpdateDb,
) -> IoResult<CargoTypeDb> {
  let item = diesel::update(cargo_types::table.find(id))
    .set(item)
    .get_result::<CargoTypeDb>(conn)
    .map_err(|err| err.map_err_context(|| "CargoType"))?;
  Ok(item)
}

pub fn delete_by_id(conn: &mut PgConnection, id: i32) -> IoResult<usize> {
  let count = diesel::delete(cargo_types::table.find(id))
    .execute(conn)
    .map_err(|err| err.map_err_context(|| "CargoType"))?;
  Ok(count)
}

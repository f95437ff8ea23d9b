//! Repository of the categories table
use diesel::prelude::*;

use cargohub_error::io::{IoResult, FromIo};

use crate::schema::categories;
use crate::models::{CategoryDb, CategoryInsertDb, CategoryUpdateDb};

pub fn list(conn: &mut PgConnection) -> IoResult<Vec<CategoryDb>> {
  let items = categories::table
    .order(categories::name.asc())
    .load::<CategoryDb>(conn)
    .map_err(|err| err.map_err_context(|| "Category"))?;
  Ok(items)
}

pub fn find_by_id(conn: &mut PgConnection, id: i32) -> IoResult<CategoryDb> {
  let item = categories::table
    .find(id)
    .get_result::<CategoryDb>(conn)
    .map_err(|err| err.map_err_context(|| "Category"))?;
  Ok(item)
}

pub fn create(
  conn: &mut PgConnection,
  item: &CategoryInsertDb,
) -> IoResult<CategoryDb> {
  let item = diesel::insert_into(categories::table)
    .values(item)
    .get_result::<CategoryDb>(conn)
    .map_err(|err| err.map_err_context(|| "Category"))?;
  Ok(item)
}

pub fn update_by_id(
  conn: &mut PgConnection,
  id: i32,
  item: &CategoryUpdateDb,
) -> IoResult<CategoryDb> {
  let item = diesel::update(categories::table.find(id))
    .set(item)
    .get_result::<CategoryDb>(conn)
    .map_err(|err| err.map_err_context(|| "Category"))?;
  Ok(item)
}

/// Returns the number of deleted rows, 0 when the category does not exist
pub fn delete_by_id(conn: &mut PgConnection, id: i32) -> IoResult<usize> {
  let count = diesel::delete(categories::table.find(id))
    .execute(conn)
    .map_err(|err| err.map_err_context(|| "Category"))?;
  Ok(count)
}

//! Repository of the cargos table
use diesel::prelude::*;
use diesel::pg::Pg;

use cargohub_error::io::{IoResult, FromIo};

use crate::schema::cargos;
use crate::models::{CargoDb, CargoInsertDb, CargoUpdateDb};
use crate::utils::pagination::PageRequest;

/// Build the filtered query shared by the count and the page.
/// Every searchable column is matched with `LIKE`, a row matches when
/// any of them does.
fn gen_search_query(pattern: Option<String>) -> cargos::BoxedQuery<'static, Pg> {
  let mut query = cargos::table.into_boxed();
  if let Some(pattern) = pattern {
    query = query.filter(
      cargos::cargo_no
        .like(pattern.clone())
        .or(cargos::note.like(pattern.clone()))
        .or(cargos::tracking_remark.like(pattern.clone()))
        .or(cargos::status.nullable().like(pattern)),
    );
  }
  query
}

/// ## Find by id
///
/// ## Arguments
///
/// - [conn](PgConnection) - Database connection
/// - [id](i32) - Id of the cargo
///
/// ## Returns
///
/// - [Result](Result) - The result of the operation
///   - [Ok](CargoDb) - The cargo
///   - [Err](IoError) - `NotFound` when no cargo has this id
///
pub fn find_by_id(conn: &mut PgConnection, id: i32) -> IoResult<CargoDb> {
  log::trace!("repositories::cargo::find_by_id {id}");
  let item = cargos::table
    .find(id)
    .get_result::<CargoDb>(conn)
    .map_err(|err| err.map_err_context(|| "Cargo"))?;
  Ok(item)
}

pub fn create(
  conn: &mut PgConnection,
  item: &CargoInsertDb,
) -> IoResult<CargoDb> {
  log::trace!("repositories::cargo::create {item:?}");
  let item = diesel::insert_into(cargos::table)
    .values(item)
    .get_result::<CargoDb>(conn)
    .map_err(|err| err.map_err_context(|| "Cargo"))?;
  Ok(item)
}

pub fn update_by_id(
  conn: &mut PgConnection,
  id: i32,
  item: &CargoUpdateDb,
) -> IoResult<CargoDb> {
  log::trace!("repositories::cargo::update_by_id {id} {item:?}");
  let item = diesel::update(cargos::table.find(id))
    .set(item)
    .get_result::<CargoDb>(conn)
    .map_err(|err| err.map_err_context(|| "Cargo"))?;
  Ok(item)
}

pub fn delete_by_id(conn: &mut PgConnection, id: i32) -> IoResult<usize> {
  log::trace!("repositories::cargo::delete_by_id {id}");
  let count = diesel::delete(cargos::table.find(id))
    .execute(conn)
    .map_err(|err| err.map_err_context(|| "Cargo"))?;
  Ok(count)
}

/// ## List page
///
/// Count the cargos matching the search then load the requested page.
/// Rows are ordered by id descending.
///
/// ## Arguments
///
/// - [conn](PgConnection) - Database connection
/// - [req](PageRequest) - Resolved page, limit and search
///
/// ## Returns
///
/// - [Result](Result) - The result of the operation
///   - [Ok]((Vec<CargoDb>, i64)) - The page of rows and the total count
///   - [Err](IoError) - Error during the operation
///
pub fn list_page(
  conn: &mut PgConnection,
  req: &PageRequest,
) -> IoResult<(Vec<CargoDb>, i64)> {
  log::trace!("repositories::cargo::list_page {req:?}");
  let total = gen_search_query(req.search_pattern())
    .count()
    .get_result::<i64>(conn)
    .map_err(|err| err.map_err_context(|| "Cargo"))?;
  let items = gen_search_query(req.search_pattern())
    .order(cargos::id.desc())
    .limit(req.limit)
    .offset(req.offset())
    .load::<CargoDb>(conn)
    .map_err(|err| err.map_err_context(|| "Cargo"))?;
  Ok((items, total))
}

//! Read access to the customers table
use diesel::prelude::*;
use diesel::pg::Pg;

use cargohub_error::io::{IoResult, FromIo};

use crate::schema::customers;
use crate::models::CustomerDb;
use crate::utils::pagination::PageRequest;

fn gen_search_query(
  pattern: Option<String>,
) -> customers::BoxedQuery<'static, Pg> {
  let mut query = customers::table.into_boxed();
  if let Some(pattern) = pattern {
    query = query.filter(
      customers::name
        .nullable()
        .like(pattern.clone())
        .or(customers::email.like(pattern.clone()))
        .or(customers::company.like(pattern)),
    );
  }
  query
}

pub fn find_by_id(conn: &mut PgConnection, id: i32) -> IoResult<CustomerDb> {
  log::trace!("repositories::customer::find_by_id {id}");
  let item = customers::table
    .find(id)
    .get_result::<CustomerDb>(conn)
    .map_err(|err| err.map_err_context(|| "Customer"))?;
  Ok(item)
}

/// Same as [find_by_id] but a missing customer is not an error
pub fn find_optional(
  conn: &mut PgConnection,
  id: Option<i32>,
) -> IoResult<Option<CustomerDb>> {
  let Some(id) = id else {
    return Ok(None);
  };
  let item = customers::table
    .find(id)
    .get_result::<CustomerDb>(conn)
    .optional()
    .map_err(|err| err.map_err_context(|| "Customer"))?;
  Ok(item)
}

/// ## List page
///
/// Count the customers matching the search then load the requested page,
/// newest first.
///
/// ## Returns
///
/// - [Result](Result) - The result of the operation
///   - [Ok]((Vec<CustomerDb>, i64)) - The page of rows and the total count
///   - [Err](IoError) - Error during the operation
///
pub fn list_page(
  conn: &mut PgConnection,
  req: &PageRequest,
) -> IoResult<(Vec<CustomerDb>, i64)> {
  log::trace!("repositories::customer::list_page {req:?}");
  let total = gen_search_query(req.search_pattern())
    .count()
    .get_result::<i64>(conn)
    .map_err(|err| err.map_err_context(|| "Customer"))?;
  let items = gen_search_query(req.search_pattern())
    .order(customers::id.desc())
    .limit(req.limit)
    .offset(req.offset())
    .load::<CustomerDb>(conn)
    .map_err(|err| err.map_err_context(|| "Customer"))?;
  Ok((items, total))
}

//! Read access to orders and their items
use diesel::prelude::*;
use diesel::pg::Pg;

use cargohub_error::io::{IoResult, FromIo};

use crate::schema::{orders, order_items};
use crate::models::{OrderDb, OrderItemDb};
use crate::utils::pagination::PageRequest;

fn gen_search_query(pattern: Option<String>) -> orders::BoxedQuery<'static, Pg> {
  let mut query = orders::table.into_boxed();
  if let Some(pattern) = pattern {
    query = query.filter(
      orders::order_no
        .like(pattern.clone())
        .or(orders::status.nullable().like(pattern.clone()))
        .or(orders::note.like(pattern)),
    );
  }
  query
}

pub fn find_by_id(conn: &mut PgConnection, id: i32) -> IoResult<OrderDb> {
  log::trace!("repositories::order::find_by_id {id}");
  let item = orders::table
    .find(id)
    .get_result::<OrderDb>(conn)
    .map_err(|err| err.map_err_context(|| "Order"))?;
  Ok(item)
}

/// Count the orders matching the search then load the requested page
pub fn list_page(
  conn: &mut PgConnection,
  req: &PageRequest,
) -> IoResult<(Vec<OrderDb>, i64)> {
  log::trace!("repositories::order::list_page {req:?}");
  let total = gen_search_query(req.search_pattern())
    .count()
    .get_result::<i64>(conn)
    .map_err(|err| err.map_err_context(|| "Order"))?;
  let items = gen_search_query(req.search_pattern())
    .order(orders::id.desc())
    .limit(req.limit)
    .offset(req.offset())
    .load::<OrderDb>(conn)
    .map_err(|err| err.map_err_context(|| "Order"))?;
  Ok((items, total))
}

pub fn list_items(
  conn: &mut PgConnection,
  order: &OrderDb,
) -> IoResult<Vec<OrderItemDb>> {
  let items = OrderItemDb::belonging_to(order)
    .order(order_items::id.asc())
    .load::<OrderItemDb>(conn)
    .map_err(|err| err.map_err_context(|| "OrderItem"))?;
  Ok(items)
}

/// Items of every given order, in one query
pub fn list_items_by_order_ids(
  conn: &mut PgConnection,
  order_ids: &[i32],
) -> IoResult<Vec<OrderItemDb>> {
  if order_ids.is_empty() {
    return Ok(Vec::new());
  }
  let items = order_items::table
    .filter(order_items::order_id.eq_any(order_ids))
    .order((order_items::order_id.asc(), order_items::id.asc()))
    .load::<OrderItemDb>(conn)
    .map_err(|err| err.map_err_context(|| "OrderItem"))?;
  Ok(items)
}

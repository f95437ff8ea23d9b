//! Repository of the cargo_orders join table
use diesel::prelude::*;

use cargohub_error::io::{IoResult, FromIo};

use crate::schema::{cargo_orders, orders};
use crate::models::{CargoOrderInsertDb, OrderDb};

/// Ids of the orders linked to a cargo, duplicated links included
pub fn list_order_ids(
  conn: &mut PgConnection,
  cargo_id: i32,
) -> IoResult<Vec<i32>> {
  let ids = cargo_orders::table
    .filter(cargo_orders::cargo_id.eq(cargo_id))
    .select(cargo_orders::order_id)
    .load::<i32>(conn)
    .map_err(|err| err.map_err_context(|| "CargoOrder"))?;
  Ok(ids)
}

/// Distinct orders linked to a cargo ordered by id
pub fn list_orders(
  conn: &mut PgConnection,
  cargo_id: i32,
) -> IoResult<Vec<OrderDb>> {
  let items = orders::table
    .inner_join(cargo_orders::table)
    .filter(cargo_orders::cargo_id.eq(cargo_id))
    .select(OrderDb::as_select())
    .distinct()
    .order(orders::id.asc())
    .load::<OrderDb>(conn)
    .map_err(|err| err.map_err_context(|| "CargoOrder"))?;
  Ok(items)
}

/// Insert one link per order id, returns the number of links created
pub fn create_many(
  conn: &mut PgConnection,
  cargo_id: i32,
  order_ids: &[i32],
) -> IoResult<usize> {
  if order_ids.is_empty() {
    return Ok(0);
  }
  let items = order_ids
    .iter()
    .map(|order_id| CargoOrderInsertDb::new(cargo_id, *order_id))
    .collect::<Vec<_>>();
  let count = diesel::insert_into(cargo_orders::table)
    .values(&items)
    .execute(conn)
    .map_err(|err| err.map_err_context(|| "CargoOrder"))?;
  Ok(count)
}

pub fn delete_by_cargo(
  conn: &mut PgConnection,
  cargo_id: i32,
) -> IoResult<usize> {
  let count = diesel::delete(
    cargo_orders::table.filter(cargo_orders::cargo_id.eq(cargo_id)),
  )
  .execute(conn)
  .map_err(|err| err.map_err_context(|| "CargoOrder"))?;
  Ok(count)
}

/// Delete every link between the cargo and the order, 0 when none existed
pub fn delete_pair(
  conn: &mut PgConnection,
  cargo_id: i32,
  order_id: i32,
) -> IoResult<usize> {
  let count = diesel::delete(
    cargo_orders::table
      .filter(cargo_orders::cargo_id.eq(cargo_id))
      .filter(cargo_orders::order_id.eq(order_id)),
  )
  .execute(conn)
  .map_err(|err| err.map_err_context(|| "CargoOrder"))?;
  Ok(count)
}

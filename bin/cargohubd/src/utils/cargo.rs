//! Cargo operations, including the assignment of orders to a cargo.
//! Every operation issuing more than one write runs in a transaction.
use std::collections::HashSet;

use cargohub_error::io::{IoError, IoResult};
use cargohub_stubs::generic::{GenericListQuery, Pagination};
use cargohub_stubs::cargo::{
  Cargo, CargoPartial, CargoUpdate, CargoOrders, CargoInspect,
};

use crate::repositories;
use crate::models::{Pool, CargoInsertDb, CargoUpdateDb};

use super::{store, pagination::PageRequest};

/// Requested order ids that are not assigned yet.
/// Keeps the request order and collapses duplicates of the request itself.
pub fn diff_new_orders(requested: &[i32], assigned: &[i32]) -> Vec<i32> {
  let mut seen = assigned.iter().copied().collect::<HashSet<_>>();
  requested
    .iter()
    .copied()
    .filter(|order_id| seen.insert(*order_id))
    .collect()
}

fn validate_order_ids(order_ids: &[i32]) -> IoResult<()> {
  if order_ids.is_empty() {
    return Err(IoError::invalid_input(
      "CargoOrder",
      "orderIds must be a non-empty list",
    ));
  }
  Ok(())
}

/// Link the orders not assigned yet to the cargo
fn assign_on(
  conn: &mut diesel::PgConnection,
  cargo_id: i32,
  order_ids: &[i32],
) -> IoResult<usize> {
  let assigned = repositories::cargo_order::list_order_ids(conn, cargo_id)?;
  let new_ids = diff_new_orders(order_ids, &assigned);
  repositories::cargo_order::create_many(conn, cargo_id, &new_ids)
}

/// Drop every link of the cargo then link the given orders
fn replace_all_on(
  conn: &mut diesel::PgConnection,
  cargo_id: i32,
  order_ids: &[i32],
) -> IoResult<usize> {
  let removed = repositories::cargo_order::delete_by_cargo(conn, cargo_id)?;
  let order_ids = diff_new_orders(order_ids, &[]);
  let count =
    repositories::cargo_order::create_many(conn, cargo_id, &order_ids)?;
  log::debug!(
    "cargo {cargo_id}: replaced {removed} assignment(s) by {count}"
  );
  Ok(count)
}

fn assignments_on(
  conn: &mut diesel::PgConnection,
  cargo_id: i32,
) -> IoResult<CargoOrders> {
  let orders = repositories::cargo_order::list_orders(conn, cargo_id)?;
  let order_ids = orders.iter().map(|order| order.id).collect::<Vec<_>>();
  let order_items =
    repositories::order::list_items_by_order_ids(conn, &order_ids)?;
  Ok(CargoOrders {
    orders: orders.into_iter().map(Into::into).collect(),
    order_items: order_items.into_iter().map(Into::into).collect(),
  })
}

/// ## Assign
///
/// Assign orders to a cargo. Orders already assigned are skipped,
/// so calling it twice with the same ids leaves the same links.
///
/// ## Arguments
///
/// - [cargo_id](i32) - Id of the cargo
/// - [order_ids](Vec<i32>) - Ids of the orders to assign
/// - [pool](Pool) - Database connection pool
///
/// ## Returns
///
/// - [Result](Result) - The result of the operation
///   - [Ok](usize) - Number of links created
///   - [Err](IoError) - `InvalidInput` for an empty list,
///     `NotFound` for an unknown cargo, `InvalidData` for an unknown order
///
pub async fn assign(
  cargo_id: i32,
  order_ids: &[i32],
  pool: &Pool,
) -> IoResult<usize> {
  validate_order_ids(order_ids)?;
  let order_ids = order_ids.to_vec();
  let count = store::transaction(pool, move |conn| {
    repositories::cargo::find_by_id(conn, cargo_id)?;
    assign_on(conn, cargo_id, &order_ids)
  })
  .await?;
  log::debug!("cargo {cargo_id}: {count} order(s) assigned");
  Ok(count)
}

/// Remove the link between a cargo and an order.
/// Succeeds even when there was no such link.
pub async fn unassign(
  cargo_id: i32,
  order_id: i32,
  pool: &Pool,
) -> IoResult<usize> {
  let count = store::run(pool, move |conn| {
    repositories::cargo_order::delete_pair(conn, cargo_id, order_id)
  })
  .await?;
  log::debug!("cargo {cargo_id}: order {order_id} unassigned ({count})");
  Ok(count)
}

/// Orders assigned to a cargo and every item of these orders
pub async fn get_assignments(
  cargo_id: i32,
  pool: &Pool,
) -> IoResult<CargoOrders> {
  store::run(pool, move |conn| {
    repositories::cargo::find_by_id(conn, cargo_id)?;
    assignments_on(conn, cargo_id)
  })
  .await
}

/// Create a cargo and assign the given orders in the same transaction
pub async fn create(item: &CargoPartial, pool: &Pool) -> IoResult<Cargo> {
  let orders = item.orders.clone().unwrap_or_default();
  let item = CargoInsertDb::from(item);
  let cargo = store::transaction(pool, move |conn| {
    let cargo = repositories::cargo::create(conn, &item)?;
    if !orders.is_empty() {
      assign_on(conn, cargo.id, &orders)?;
    }
    Ok(cargo)
  })
  .await?;
  log::debug!("cargo {} created", cargo.id);
  Ok(cargo.into())
}

/// ## Update
///
/// Merge the given fields into the cargo.
/// When `orders` is present every assignment is replaced by these orders,
/// an empty list removing them all.
///
/// ## Arguments
///
/// - [id](i32) - Id of the cargo
/// - [item](CargoUpdate) - Fields to merge
/// - [pool](Pool) - Database connection pool
///
/// ## Returns
///
/// - [Result](Result) - The result of the operation
///   - [Ok](Cargo) - The updated cargo
///   - [Err](IoError) - `NotFound` for an unknown cargo
///
pub async fn update(
  id: i32,
  item: &CargoUpdate,
  pool: &Pool,
) -> IoResult<Cargo> {
  let orders = item.orders.clone();
  let item = CargoUpdateDb::from(item);
  let cargo = store::transaction(pool, move |conn| {
    let cargo = repositories::cargo::update_by_id(conn, id, &item)?;
    if let Some(orders) = orders {
      replace_all_on(conn, id, &orders)?;
    }
    Ok(cargo)
  })
  .await?;
  log::debug!("cargo {id} updated");
  Ok(cargo.into())
}

/// Delete a cargo and its assignments
pub async fn delete(id: i32, pool: &Pool) -> IoResult<()> {
  store::transaction(pool, move |conn| {
    repositories::cargo::find_by_id(conn, id)?;
    let links = repositories::cargo_order::delete_by_cargo(conn, id)?;
    repositories::cargo::delete_by_id(conn, id)?;
    log::debug!("cargo {id} deleted with {links} assignment(s)");
    Ok(())
  })
  .await
}

/// Cargo with its type, its customer and its assigned orders
pub async fn inspect(id: i32, pool: &Pool) -> IoResult<CargoInspect> {
  store::run(pool, move |conn| {
    let cargo = repositories::cargo::find_by_id(conn, id)?;
    let cargo_type =
      repositories::cargo_type::find_optional(conn, cargo.cargo_type_id)?;
    let customer =
      repositories::customer::find_optional(conn, cargo.customer_id)?;
    let assignments = assignments_on(conn, id)?;
    Ok(CargoInspect {
      cargo: cargo.into(),
      cargo_type: cargo_type.map(Into::into),
      customer: customer.map(Into::into),
      assignments,
    })
  })
  .await
}

pub async fn list(
  qs: &GenericListQuery,
  pool: &Pool,
) -> IoResult<(Vec<Cargo>, Pagination)> {
  let req = PageRequest::from(qs);
  let pagination_req = req.clone();
  let (items, total) =
    store::run(pool, move |conn| repositories::cargo::list_page(conn, &req))
      .await?;
  Ok((
    items.into_iter().map(Into::into).collect(),
    pagination_req.pagination(total),
  ))
}

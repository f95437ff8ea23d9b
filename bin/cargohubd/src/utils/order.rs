use cargohub_error::io::IoResult;
use cargohub_stubs::order::{Order, OrderInspect};
use cargohub_stubs::generic::{GenericListQuery, Pagination};

use crate::repositories;
use crate::models::Pool;

use super::{store, pagination::PageRequest};

pub async fn list(
  qs: &GenericListQuery,
  pool: &Pool,
) -> IoResult<(Vec<Order>, Pagination)> {
  let req = PageRequest::from(qs);
  let pagination_req = req.clone();
  let (items, total) =
    store::run(pool, move |conn| repositories::order::list_page(conn, &req))
      .await?;
  Ok((
    items.into_iter().map(Into::into).collect(),
    pagination_req.pagination(total),
  ))
}

/// Order with its items
pub async fn inspect(id: i32, pool: &Pool) -> IoResult<OrderInspect> {
  store::run(pool, move |conn| {
    let order = repositories::order::find_by_id(conn, id)?;
    let items = repositories::order::list_items(conn, &order)?;
    Ok(OrderInspect {
      order: order.into(),
      items: items.into_iter().map(Into::into).collect(),
    })
  })
  .await
}

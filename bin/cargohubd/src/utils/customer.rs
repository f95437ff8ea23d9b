use cargohub_error::io::IoResult;
use cargohub_stubs::customer::Customer;
use cargohub_stubs::generic::{GenericListQuery, Pagination};

use crate::repositories;
use crate::models::Pool;

use super::{store, pagination::PageRequest};

pub async fn list(
  qs: &GenericListQuery,
  pool: &Pool,
) -> IoResult<(Vec<Customer>, Pagination)> {
  let req = PageRequest::from(qs);
  let pagination_req = req.clone();
  let (items, total) = store::run(pool, move |conn| {
    repositories::customer::list_page(conn, &req)
  })
  .await?;
  Ok((
    items.into_iter().map(Into::into).collect(),
    pagination_req.pagination(total),
  ))
}

pub async fn inspect(id: i32, pool: &Pool) -> IoResult<Customer> {
  let item =
    store::run(pool, move |conn| repositories::customer::find_by_id(conn, id))
      .await?;
  Ok(item.into())
}

use cargohub_error::io::{IoError, IoResult};
use cargohub_stubs::category::{Category, CategoryPartial, CategoryUpdate};

use crate::repositories;
use crate::models::{Pool, CategoryInsertDb, CategoryUpdateDb};

use super::{store, validate};

pub async fn list(pool: &Pool) -> IoResult<Vec<Category>> {
  let items = store::run(pool, repositories::category::list).await?;
  Ok(items.into_iter().map(Into::into).collect())
}

pub async fn inspect(id: i32, pool: &Pool) -> IoResult<Category> {
  let item =
    store::run(pool, move |conn| repositories::category::find_by_id(conn, id))
      .await?;
  Ok(item.into())
}

pub async fn create(item: &CategoryPartial, pool: &Pool) -> IoResult<Category> {
  validate::required_text("Category", "name", &item.name)?;
  let item = CategoryInsertDb::from(item);
  let item =
    store::run(pool, move |conn| repositories::category::create(conn, &item))
      .await?;
  log::debug!("category {} created", item.id);
  Ok(item.into())
}

pub async fn update(
  id: i32,
  item: &CategoryUpdate,
  pool: &Pool,
) -> IoResult<Category> {
  validate::optional_text("Category", "name", item.name.as_deref())?;
  let item = CategoryUpdateDb::from(item);
  let item = store::run(pool, move |conn| {
    repositories::category::update_by_id(conn, id, &item)
  })
  .await?;
  Ok(item.into())
}

pub async fn delete(id: i32, pool: &Pool) -> IoResult<()> {
  let count =
    store::run(pool, move |conn| repositories::category::delete_by_id(conn, id))
      .await?;
  if count == 0 {
    return Err(IoError::not_found("Category", "Record not found"));
  }
  log::debug!("category {id} deleted");
  Ok(())
}

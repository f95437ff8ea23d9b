use cargohub_error::io::{IoError, IoResult};
use cargohub_stubs::cargo_type::{CargoType, CargoTypePartial, CargoTypeUpdate};

use crate::repositories;
use crate::models::{Pool, CargoTypeInsertDb, CargoTypeUpdateDb};

use super::{store, validate};

pub async fn list(pool: &Pool) -> IoResult<Vec<CargoType>> {
  let items = store::run(pool, repositories::cargo_type::list).await?;
  Ok(items.into_iter().map(Into::into).collect())
}

pub async fn inspect(id: i32, pool: &Pool) -> IoResult<CargoType> {
  let item = store::run(pool, move |conn| {
    repositories::cargo_type::find_by_id(conn, id)
  })
  .await?;
  Ok(item.into())
}

/// Create a cargo type, the label must not be blank
pub async fn create(
  item: &CargoTypePartial,
  pool: &Pool,
) -> IoResult<CargoType> {
  validate::required_text("CargoType", "type", &item.type_name)?;
  let item = CargoTypeInsertDb::from(item);
  let item = store::run(pool, move |conn| {
    repositories::cargo_type::create(conn, &item)
  })
  .await?;
  log::debug!("cargo type {} created", item.id);
  Ok(item.into())
}

pub async fn update(
  id: i32,
  item: &CargoTypeUpdate,
  pool: &Pool,
) -> IoResult<CargoType> {
  validate::optional_text("CargoType", "type", item.type_name.as_deref())?;
  let item = CargoTypeUpdateDb::from(item);
  let item = store::run(pool, move |conn| {
    repositories::cargo_type::update_by_id(conn, id, &item)
  })
  .await?;
  Ok(item.into())
}

pub async fn delete(id: i32, pool: &Pool) -> IoResult<()> {
  let count = store::run(pool, move |conn| {
    repositories::cargo_type::delete_by_id(conn, id)
  })
  .await?;
  if count == 0 {
    return Err(IoError::not_found("CargoType", "Record not found"));
  }
  log::debug!("cargo type {id} deleted");
  Ok(())
}

use ntex::web;

use cargohub_error::http::HttpResult;
use cargohub_stubs::generic::{ApiResponse, GenericListQuery};

use crate::{utils, models::SystemState};

/// List orders, searched by number, status or note.
/// Used to pick the orders to assign to a cargo.
#[web::get("/orders")]
pub async fn list_order(
  state: web::types::State<SystemState>,
  qs: web::types::Query<GenericListQuery>,
) -> HttpResult<web::HttpResponse> {
  let (items, pagination) = utils::order::list(&qs, &state.pool).await?;
  Ok(web::HttpResponse::Ok().json(&ApiResponse::page(items, pagination)))
}

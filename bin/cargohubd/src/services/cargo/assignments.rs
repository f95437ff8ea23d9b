use ntex::web;

use cargohub_error::http::HttpResult;
use cargohub_stubs::generic::ApiResponse;

use crate::{utils, models::SystemState};

/// Orders assigned to a cargo with their items
#[web::get("/cargos/{id}/orders")]
pub async fn list_cargo_orders(
  state: web::types::State<SystemState>,
  path: web::types::Path<i32>,
) -> HttpResult<web::HttpResponse> {
  let item = utils::cargo::get_assignments(*path, &state.pool).await?;
  Ok(web::HttpResponse::Ok().json(&ApiResponse::data(item)))
}

use ntex::web;

use cargohub_error::http::HttpResult;
use cargohub_stubs::generic::ApiResponse;

use crate::{utils, models::SystemState};

/// Cargo detail with its type, its customer and its assigned orders
#[web::get("/cargos/{id}")]
pub async fn inspect_cargo(
  state: web::types::State<SystemState>,
  path: web::types::Path<i32>,
) -> HttpResult<web::HttpResponse> {
  let item = utils::cargo::inspect(*path, &state.pool).await?;
  Ok(web::HttpResponse::Ok().json(&ApiResponse::data(item)))
}

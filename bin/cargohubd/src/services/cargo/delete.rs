use ntex::web;

use cargohub_error::http::HttpResult;
use cargohub_stubs::generic::ApiResponse;

use crate::{utils, models::SystemState};

/// Delete a cargo and unlink its orders
#[web::delete("/cargos/{id}")]
pub async fn delete_cargo(
  state: web::types::State<SystemState>,
  path: web::types::Path<i32>,
) -> HttpResult<web::HttpResponse> {
  utils::cargo::delete(*path, &state.pool).await?;
  Ok(web::HttpResponse::Ok().json(&ApiResponse::message("Cargo deleted")))
}

use ntex::web;

use cargohub_error::http::HttpResult;
use cargohub_stubs::generic::ApiResponse;

use crate::{utils, models::SystemState};

#[web::delete("/cargo-types/{id}")]
pub async fn delete_cargo_type(
  state: web::types::State<SystemState>,
  path: web::types::Path<i32>,
) -> HttpResult<web::HttpResponse> {
  utils::cargo_type::delete(*path, &state.pool).await?;
  Ok(web::HttpResponse::Ok().json(&ApiResponse::message("Cargo type deleted")))
}

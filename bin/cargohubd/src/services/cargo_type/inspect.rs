use ntex::web;

use cargohub_error::http::HttpResult;
use cargohub_stubs::generic::ApiResponse;

use crate::{utils, models::SystemState};

#[web::get("/cargo-types/{id}")]
pub async fn inspect_cargo_type(
  state: web::types::State<SystemState>,
  path: web::types::Path<i32>,
) -> HttpResult<web::HttpResponse> {
  let item = utils::cargo_type::inspect(*path, &state.pool).await?;
  Ok(web::HttpResponse::Ok().json(&ApiResponse::data(item)))
}

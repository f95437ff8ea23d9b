use ntex::web;

use cargohub_error::http::HttpResult;
use cargohub_stubs::generic::ApiResponse;

use crate::{utils, models::SystemState};

/// Cargo types sorted by label
#[web::get("/cargo-types")]
pub async fn list_cargo_type(
  state: web::types::State<SystemState>,
) -> HttpResult<web::HttpResponse> {
  let items = utils::cargo_type::list(&state.pool).await?;
  Ok(web::HttpResponse::Ok().json(&ApiResponse::data(items)))
}

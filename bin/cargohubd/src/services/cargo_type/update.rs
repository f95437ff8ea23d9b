use ntex::web;

use cargohub_error::http::HttpResult;
use cargohub_stubs::generic::ApiResponse;
use cargohub_stubs::cargo_type::CargoTypeUpdate;

use crate::{utils, models::SystemState};

/// Merge the given fields into a cargo type
#[web::put("/cargo-types/{id}")]
pub async fn update_cargo_type(
  state: web::types::State<SystemState>,
  path: web::types::Path<i32>,
  payload: web::types::Json<CargoTypeUpdate>,
) -> HttpResult<web::HttpResponse> {
  let item = utils::cargo_type::update(*path, &payload, &state.pool).await?;
  Ok(
    web::HttpResponse::Ok()
      .json(&ApiResponse::with_message("Cargo type updated", item)),
  )
}

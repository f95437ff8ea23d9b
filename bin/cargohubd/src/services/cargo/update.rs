use ntex::web;

use cargohub_error::http::HttpResult;
use cargohub_stubs::generic::ApiResponse;
use cargohub_stubs::cargo::CargoUpdate;

use crate::{utils, models::SystemState};

/// Merge fields into a cargo.
/// A present `orders` list replaces the assigned orders.
#[web::put("/cargos/{id}")]
pub async fn update_cargo(
  state: web::types::State<SystemState>,
  path: web::types::Path<i32>,
  payload: web::types::Json<CargoUpdate>,
) -> HttpResult<web::HttpResponse> {
  let item = utils::cargo::update(*path, &payload, &state.pool).await?;
  Ok(
    web::HttpResponse::Ok()
      .json(&ApiResponse::with_message("Cargo updated", item)),
  )
}

use ntex::web;

use cargohub_error::http::HttpResult;
use cargohub_stubs::generic::ApiResponse;
use cargohub_stubs::cargo::CargoPartial;

use crate::{utils, models::SystemState};

/// Create a cargo, optionally with the orders it carries
#[web::post("/cargos")]
pub async fn create_cargo(
  state: web::types::State<SystemState>,
  payload: web::types::Json<CargoPartial>,
) -> HttpResult<web::HttpResponse> {
  let item = utils::cargo::create(&payload, &state.pool).await?;
  Ok(
    web::HttpResponse::Created()
      .json(&ApiResponse::with_message("Cargo created", item)),
  )
}

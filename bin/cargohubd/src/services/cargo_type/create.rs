use ntex::web;

use cargohub_error::http::HttpResult;
use cargohub_stubs::generic::ApiResponse;
use cargohub_stubs::cargo_type::CargoTypePartial;

use crate::{utils, models::SystemState};

#[web::post("/cargo-types")]
pub async fn create_cargo_type(
  state: web::types::State<SystemState>,
  payload: web::types::Json<CargoTypePartial>,
) -> HttpResult<web::HttpResponse> {
  let item = utils::cargo_type::create(&payload, &state.pool).await?;
  Ok(
    web::HttpResponse::Created()
      .json(&ApiResponse::with_message("Cargo type created", item)),
  )
}

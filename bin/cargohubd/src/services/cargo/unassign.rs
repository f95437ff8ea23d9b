use ntex::web;

use cargohub_error::http::HttpResult;
use cargohub_stubs::generic::ApiResponse;

use crate::{utils, models::SystemState};

#[web::delete("/cargos/{id}/orders/{order_id}")]
pub async fn unassign_cargo_order(
  state: web::types::State<SystemState>,
  path: web::types::Path<(i32, i32)>,
) -> HttpResult<web::HttpResponse> {
  let (cargo_id, order_id) = path.into_inner();
  utils::cargo::unassign(cargo_id, order_id, &state.pool).await?;
  Ok(web::HttpResponse::Ok().json(&ApiResponse::message("Order unassigned")))
}

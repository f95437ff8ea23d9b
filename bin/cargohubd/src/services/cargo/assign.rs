use ntex::web;

use cargohub_error::http::HttpResult;
use cargohub_stubs::cargo::CargoAssignOrders;
use cargohub_stubs::generic::{ApiResponse, GenericCount};

use crate::{utils, models::SystemState};

/// Assign orders to a cargo, orders already assigned are skipped
#[web::post("/cargos/{id}/orders")]
pub async fn assign_cargo_orders(
  state: web::types::State<SystemState>,
  path: web::types::Path<i32>,
  payload: web::types::Json<CargoAssignOrders>,
) -> HttpResult<web::HttpResponse> {
  let count =
    utils::cargo::assign(*path, &payload.order_ids, &state.pool).await?;
  Ok(web::HttpResponse::Ok().json(&ApiResponse::with_message(
    "Orders assigned",
    GenericCount { count },
  )))
}

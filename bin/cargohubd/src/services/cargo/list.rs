use ntex::web;

use cargohub_error::http::HttpResult;
use cargohub_stubs::generic::{ApiResponse, GenericListQuery};

use crate::{utils, models::SystemState};

/// List cargos, newest first, filtered by `search` and paginated
#[web::get("/cargos")]
pub async fn list_cargo(
  state: web::types::State<SystemState>,
  qs: web::types::Query<GenericListQuery>,
) -> HttpResult<web::HttpResponse> {
  let (items, pagination) = utils::cargo::list(&qs, &state.pool).await?;
  Ok(web::HttpResponse::Ok().json(&ApiResponse::page(items, pagination)))
}

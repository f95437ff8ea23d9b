use ntex::web;

use cargohub_error::http::HttpResult;
use cargohub_stubs::generic::{ApiResponse, GenericListQuery};

use crate::{utils, models::SystemState};

/// List customers, searched by name, email or company
#[web::get("/customers")]
pub async fn list_customer(
  state: web::types::State<SystemState>,
  qs: web::types::Query<GenericListQuery>,
) -> HttpResult<web::HttpResponse> {
  let (items, pagination) = utils::customer::list(&qs, &state.pool).await?;
  Ok(web::HttpResponse::Ok().json(&ApiResponse::page(items, pagination)))
}

use ntex::web;

use cargohub_error::http::HttpResult;
use cargohub_stubs::generic::ApiResponse;

use crate::{utils, models::SystemState};

#[web::get("/categories/{id}")]
pub async fn inspect_category(
  state: web::types::State<SystemState>,
  path: web::types::Path<i32>,
) -> HttpResult<web::HttpResponse> {
  let item = utils::category::inspect(*path, &state.pool).await?;
  Ok(web::HttpResponse::Ok().json(&ApiResponse::data(item)))
}

use ntex::web;

use cargohub_error::http::HttpResult;
use cargohub_stubs::generic::ApiResponse;

use crate::{utils, models::SystemState};

#[web::get("/categories")]
pub async fn list_category(
  state: web::types::State<SystemState>,
) -> HttpResult<web::HttpResponse> {
  let items = utils::category::list(&state.pool).await?;
  Ok(web::HttpResponse::Ok().json(&ApiResponse::data(items)))
}

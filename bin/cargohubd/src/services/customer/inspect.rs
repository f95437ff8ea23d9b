use ntex::web;

use cargohub_error::http::HttpResult;
use cargohub_stubs::generic::ApiResponse;

use crate::{utils, models::SystemState};

#[web::get("/customers/{id}")]
pub async fn inspect_customer(
  state: web::types::State<SystemState>,
  path: web::types::Path<i32>,
) -> HttpResult<web::HttpResponse> {
  let item = utils::customer::inspect(*path, &state.pool).await?;
  Ok(web::HttpResponse::Ok().json(&ApiResponse::data(item)))
}

use ntex::web;

use cargohub_error::http::HttpResult;
use cargohub_stubs::generic::ApiResponse;
use cargohub_stubs::category::CategoryUpdate;

use crate::{utils, models::SystemState};

#[web::put("/categories/{id}")]
pub async fn update_category(
  state: web::types::State<SystemState>,
  path: web::types::Path<i32>,
  payload: web::types::Json<CategoryUpdate>,
) -> HttpResult<web::HttpResponse> {
  let item = utils::category::update(*path, &payload, &state.pool).await?;
  Ok(
    web::HttpResponse::Ok()
      .json(&ApiResponse::with_message("Category updated", item)),
  )
}

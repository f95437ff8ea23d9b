use ntex::web;

use cargohub_error::http::HttpResult;
use cargohub_stubs::generic::ApiResponse;

use crate::{utils, models::SystemState};

/// Delete a category, order items keep existing without category
#[web::delete("/categories/{id}")]
pub async fn delete_category(
  state: web::types::State<SystemState>,
  path: web::types::Path<i32>,
) -> HttpResult<web::HttpResponse> {
  utils::category::delete(*path, &state.pool).await?;
  Ok(web::HttpResponse::Ok().json(&ApiResponse::message("Category deleted")))
}

use ntex::web;

use cargohub_error::http::HttpResult;
use cargohub_stubs::generic::ApiResponse;
use cargohub_stubs::category::CategoryPartial;

use crate::{utils, models::SystemState};

#[web::post("/categories")]
pub async fn create_category(
  state: web::types::State<SystemState>,
  payload: web::types::Json<CategoryPartial>,
) -> HttpResult<web::HttpResponse> {
  let item = utils::category::create(&payload, &state.pool).await?;
  Ok(
    web::HttpResponse::Created()
      .json(&ApiResponse::with_message("Category created", item)),
  )
}

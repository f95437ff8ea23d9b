use ntex::web;

use cargohub_error::http::HttpError;

mod system;
mod cargo;
mod cargo_type;
mod category;
mod order;
mod customer;

pub async fn unhandled() -> Result<web::HttpResponse, HttpError> {
  Err(HttpError::not_found("Route or method unhandled"))
}

pub fn ntex_config(config: &mut web::ServiceConfig) {
  system::ntex_config(config);
  cargo::ntex_config(config);
  cargo_type::ntex_config(config);
  category::ntex_config(config);
  order::ntex_config(config);
  customer::ntex_config(config);
}

#[cfg(test)]
mod tests {
  use ntex::http;

  use crate::utils::tests::*;

  #[ntex::test]
  async fn unhandled_route() {
    let client = gen_default_test_client();
    let res = client.send_get("/nope", None::<String>).await;
    test_status_code!(http::StatusCode::NOT_FOUND, res.status(), "unhandled");
    let body = TestClient::res_json::<serde_json::Value>(res).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Route or method unhandled");
  }
}

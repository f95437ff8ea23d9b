use ntex::web;

pub mod list;
pub mod inspect;
pub mod create;
pub mod update;
pub mod delete;

pub use list::*;
pub use inspect::*;
pub use create::*;
pub use update::*;
pub use delete::*;

pub fn ntex_config(config: &mut web::ServiceConfig) {
  config.service(list_cargo_type);
  config.service(create_cargo_type);
  config.service(inspect_cargo_type);
  config.service(update_cargo_type);
  config.service(delete_cargo_type);
}

#[cfg(test)]
mod tests {
  use ntex::http;
  use serde_json::json;

  use crate::utils::tests::*;

  const ENDPOINT: &str = "/cargo-types";

  #[ntex::test]
  async fn blank_label_is_rejected() {
    let client = gen_default_test_client();
    let res = client.send_post(ENDPOINT, Some(json!({ "type": "  " }))).await;
    test_status_code!(http::StatusCode::BAD_REQUEST, res.status(), "create");
    let body = TestClient::res_json::<serde_json::Value>(res).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "CargoType: Type is required");
    let res = client
      .send_put(&format!("{ENDPOINT}/1"), Some(json!({ "type": "" })))
      .await;
    test_status_code!(http::StatusCode::BAD_REQUEST, res.status(), "update");
  }

  #[ntex::test]
  async fn missing_label_is_rejected() {
    let client = gen_default_test_client();
    let res = client.send_post(ENDPOINT, Some(json!({ "duration": 3 }))).await;
    test_status_code!(http::StatusCode::BAD_REQUEST, res.status(), "create");
    let body = TestClient::res_json::<serde_json::Value>(res).await;
    assert_eq!(body["success"], false);
  }

  #[cfg(feature = "test")]
  #[ntex::test]
  async fn basic() {
    use cargohub_stubs::generic::ApiResponse;
    use cargohub_stubs::cargo_type::CargoType;

    let system = gen_store_test_system().await;
    let client = &system.client;
    let label = format!("Sea {}", unique_suffix());
    let res = client
      .send_post(ENDPOINT, Some(json!({ "type": label, "duration": 30 })))
      .await;
    test_status_code!(http::StatusCode::CREATED, res.status(), "create");
    let body = TestClient::res_json::<ApiResponse<CargoType>>(res).await;
    let item = body.data.expect("Expect created cargo type");
    assert_eq!(item.type_name, label);
    let res = client
      .send_put(&format!("{ENDPOINT}/{}", item.id), Some(json!({ "duration": 12 })))
      .await;
    test_status_code!(http::StatusCode::OK, res.status(), "update");
    let body = TestClient::res_json::<ApiResponse<CargoType>>(res).await;
    let updated = body.data.expect("Expect updated cargo type");
    assert_eq!(updated.duration, Some(12));
    assert_eq!(updated.type_name, label);
    let res = client.send_get(ENDPOINT, None::<String>).await;
    let body = TestClient::res_json::<ApiResponse<Vec<CargoType>>>(res).await;
    assert!(body.data.expect("Expect list").iter().any(|t| t.id == item.id));
    let res = client.send_delete(&format!("{ENDPOINT}/{}", item.id)).await;
    test_status_code!(http::StatusCode::OK, res.status(), "delete");
    let res = client
      .send_get(&format!("{ENDPOINT}/{}", item.id), None::<String>)
      .await;
    test_status_code!(http::StatusCode::NOT_FOUND, res.status(), "inspect");
    let res = client.send_delete(&format!("{ENDPOINT}/{}", item.id)).await;
    test_status_code!(http::StatusCode::NOT_FOUND, res.status(), "delete");
  }
}

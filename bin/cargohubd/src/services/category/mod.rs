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
  config.service(list_category);
  config.service(create_category);
  config.service(inspect_category);
  config.service(update_category);
  config.service(delete_category);
}

#[cfg(test)]
mod tests {
  use ntex::http;
  use serde_json::json;

  use crate::utils::tests::*;

  const ENDPOINT: &str = "/categories";

  #[ntex::test]
  async fn blank_name_is_rejected() {
    let client = gen_default_test_client();
    let res = client.send_post(ENDPOINT, Some(json!({ "name": "" }))).await;
    test_status_code!(http::StatusCode::BAD_REQUEST, res.status(), "create");
    let body = TestClient::res_json::<serde_json::Value>(res).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Category: Name is required");
  }

  #[cfg(feature = "test")]
  #[ntex::test]
  async fn basic() {
    use cargohub_stubs::generic::ApiResponse;
    use cargohub_stubs::category::Category;

    let system = gen_store_test_system().await;
    let client = &system.client;
    let name = format!("Textile {}", unique_suffix());
    let res = client.send_post(ENDPOINT, Some(json!({ "name": name }))).await;
    test_status_code!(http::StatusCode::CREATED, res.status(), "create");
    let body = TestClient::res_json::<ApiResponse<Category>>(res).await;
    assert_eq!(body.message.as_deref(), Some("Category created"));
    let item = body.data.expect("Expect created category");
    let res = client
      .send_put(
        &format!("{ENDPOINT}/{}", item.id),
        Some(json!({ "name": format!("{name} 2") })),
      )
      .await;
    test_status_code!(http::StatusCode::OK, res.status(), "update");
    let res = client
      .send_get(&format!("{ENDPOINT}/{}", item.id), None::<String>)
      .await;
    let body = TestClient::res_json::<ApiResponse<Category>>(res).await;
    assert_eq!(body.data.expect("Expect category").name, format!("{name} 2"));
    let res = client.send_delete(&format!("{ENDPOINT}/{}", item.id)).await;
    test_status_code!(http::StatusCode::OK, res.status(), "delete");
    let res = client
      .send_put(&format!("{ENDPOINT}/{}", item.id), Some(json!({ "name": "x" })))
      .await;
    test_status_code!(http::StatusCode::NOT_FOUND, res.status(), "update");
  }
}

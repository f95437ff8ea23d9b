use ntex::web;

pub mod list;
pub mod inspect;
pub mod create;
pub mod update;
pub mod delete;
pub mod assign;
pub mod unassign;
pub mod assignments;

pub use list::*;
pub use inspect::*;
pub use create::*;
pub use update::*;
pub use delete::*;
pub use assign::*;
pub use unassign::*;
pub use assignments::*;

pub fn ntex_config(config: &mut web::ServiceConfig) {
  config.service(list_cargo);
  config.service(create_cargo);
  config.service(inspect_cargo);
  config.service(update_cargo);
  config.service(delete_cargo);
  config.service(list_cargo_orders);
  config.service(assign_cargo_orders);
  config.service(unassign_cargo_order);
}

#[cfg(test)]
mod tests {
  use ntex::http;
  use serde_json::json;

  use crate::utils::tests::*;

  const ENDPOINT: &str = "/cargos";

  #[ntex::test]
  async fn assign_empty_order_ids() {
    let client = gen_default_test_client();
    let res = client
      .send_post(
        &format!("{ENDPOINT}/1/orders"),
        Some(json!({ "orderIds": [] })),
      )
      .await;
    test_status_code!(http::StatusCode::BAD_REQUEST, res.status(), "assign");
    let body = TestClient::res_json::<serde_json::Value>(res).await;
    assert_eq!(body["success"], false);
    assert_eq!(
      body["message"],
      "CargoOrder: OrderIds must be a non-empty list"
    );
  }

  #[ntex::test]
  async fn assign_order_ids_not_a_list() {
    let client = gen_default_test_client();
    let res = client
      .send_post(
        &format!("{ENDPOINT}/1/orders"),
        Some(json!({ "orderIds": 3 })),
      )
      .await;
    test_status_code!(http::StatusCode::BAD_REQUEST, res.status(), "assign");
    let body = TestClient::res_json::<serde_json::Value>(res).await;
    assert_eq!(body["success"], false);
    assert!(body["message"].is_string());
    let res = client
      .send_raw(client.post(&format!("{ENDPOINT}/1/orders")), "{ not json")
      .await;
    test_status_code!(http::StatusCode::BAD_REQUEST, res.status(), "assign");
    let body = TestClient::res_json::<serde_json::Value>(res).await;
    assert_eq!(body["success"], false);
  }

  #[ntex::test]
  async fn list_invalid_query() {
    let client = gen_default_test_client();
    let res = client
      .send_get(&format!("{ENDPOINT}?page=abc"), None::<String>)
      .await;
    test_status_code!(http::StatusCode::BAD_REQUEST, res.status(), "list");
    let body = TestClient::res_json::<serde_json::Value>(res).await;
    assert_eq!(body["success"], false);
  }

  #[ntex::test]
  async fn writes_require_a_session() {
    let client = gen_guarded_test_client();
    let res = client
      .send_post(ENDPOINT, Some(json!({ "cargo_no": "ABC123" })))
      .await;
    test_status_code!(http::StatusCode::UNAUTHORIZED, res.status(), "create");
    let body = TestClient::res_json::<serde_json::Value>(res).await;
    assert_eq!(body["success"], false);
    let res = client.send_delete(&format!("{ENDPOINT}/1/orders/2")).await;
    test_status_code!(http::StatusCode::UNAUTHORIZED, res.status(), "unassign");
    // The guard lets the request through, validation answers
    let client = client.with_session(TEST_SESSION_TOKEN);
    let res = client
      .send_post(
        &format!("{ENDPOINT}/1/orders"),
        Some(json!({ "orderIds": [] })),
      )
      .await;
    test_status_code!(http::StatusCode::BAD_REQUEST, res.status(), "assign");
    let client = gen_guarded_test_client();
    let res = client
      .post(&format!("{ENDPOINT}/1/orders"))
      .header("Cookie", format!("theme=dark; session={TEST_SESSION_TOKEN}"))
      .send_json(&json!({ "orderIds": [] }))
      .await
      .expect("Expect request to be sent");
    test_status_code!(http::StatusCode::BAD_REQUEST, res.status(), "assign");
  }

  #[cfg(feature = "test")]
  mod store {
    use ntex::http;
    use serde_json::json;

    use cargohub_stubs::generic::{ApiResponse, GenericCount};
    use cargohub_stubs::cargo::{Cargo, CargoInspect, CargoOrders};

    use crate::utils::tests::*;

    use super::ENDPOINT;

    async fn create(client: &TestClient, cargo_no: &str) -> Cargo {
      let res = client
        .send_post(
          ENDPOINT,
          Some(json!({ "cargo_no": cargo_no, "id": 0, "created_at": "x" })),
        )
        .await;
      test_status_code!(http::StatusCode::CREATED, res.status(), "create");
      let body = TestClient::res_json::<ApiResponse<Cargo>>(res).await;
      assert_eq!(body.message.as_deref(), Some("Cargo created"));
      let cargo = body.data.expect("Expect created cargo");
      assert_eq!(cargo.status, "Open");
      cargo
    }

    async fn assign(client: &TestClient, id: i32, ids: &[i32]) -> usize {
      let res = client
        .send_post(
          &format!("{ENDPOINT}/{id}/orders"),
          Some(json!({ "orderIds": ids })),
        )
        .await;
      test_status_code!(http::StatusCode::OK, res.status(), "assign");
      let body = TestClient::res_json::<ApiResponse<GenericCount>>(res).await;
      body.data.expect("Expect assign count").count
    }

    async fn assigned_ids(client: &TestClient, id: i32) -> Vec<i32> {
      let res = client
        .send_get(&format!("{ENDPOINT}/{id}/orders"), None::<String>)
        .await;
      test_status_code!(http::StatusCode::OK, res.status(), "assignments");
      let body = TestClient::res_json::<ApiResponse<CargoOrders>>(res).await;
      let data = body.data.expect("Expect assignments");
      let mut ids = data.orders.iter().map(|o| o.id).collect::<Vec<_>>();
      ids.sort();
      ids
    }

    async fn replace(client: &TestClient, id: i32, ids: &[i32]) {
      let res = client
        .send_put(&format!("{ENDPOINT}/{id}"), Some(json!({ "orders": ids })))
        .await;
      test_status_code!(http::StatusCode::OK, res.status(), "update");
    }

    #[ntex::test]
    async fn assignment_lifecycle() {
      let system = gen_store_test_system().await;
      let client = &system.client;
      let suffix = unique_suffix();
      let o1 = seed_order(&system.state, &format!("O1-{suffix}")).await;
      let o2 = seed_order(&system.state, &format!("O2-{suffix}")).await;
      let o3 = seed_order(&system.state, &format!("O3-{suffix}")).await;
      let cargo = create(client, &format!("ABC{suffix}")).await;
      // Assign is idempotent
      assert_eq!(assign(client, cargo.id, &[o1, o2, o2]).await, 2);
      assert_eq!(assign(client, cargo.id, &[o1, o2]).await, 0);
      assert_eq!(count_cargo_links(&system.state, cargo.id).await, 2);
      assert_eq!(assigned_ids(client, cargo.id).await, vec![o1, o2]);
      // Inspect carries the orders and their items
      let res = client
        .send_get(&format!("{ENDPOINT}/{}", cargo.id), None::<String>)
        .await;
      test_status_code!(http::StatusCode::OK, res.status(), "inspect");
      let body = TestClient::res_json::<ApiResponse<CargoInspect>>(res).await;
      let inspect = body.data.expect("Expect cargo detail");
      assert_eq!(inspect.assignments.orders.len(), 2);
      assert_eq!(inspect.assignments.order_items.len(), 2);
      // Replace all is destructive
      replace(client, cargo.id, &[o3]).await;
      assert_eq!(assigned_ids(client, cargo.id).await, vec![o3]);
      replace(client, cargo.id, &[]).await;
      assert!(assigned_ids(client, cargo.id).await.is_empty());
      // Unassign of a missing pair still succeeds
      let res = client
        .send_delete(&format!("{ENDPOINT}/{}/orders/{o1}", cargo.id))
        .await;
      test_status_code!(http::StatusCode::OK, res.status(), "unassign");
      let body = TestClient::res_json::<serde_json::Value>(res).await;
      assert_eq!(body["success"], true);
      // Delete removes the links then the cargo
      assign(client, cargo.id, &[o1, o2]).await;
      let res = client.send_delete(&format!("{ENDPOINT}/{}", cargo.id)).await;
      test_status_code!(http::StatusCode::OK, res.status(), "delete");
      assert_eq!(count_cargo_links(&system.state, cargo.id).await, 0);
      let res = client
        .send_get(&format!("{ENDPOINT}/{}", cargo.id), None::<String>)
        .await;
      test_status_code!(http::StatusCode::NOT_FOUND, res.status(), "inspect");
      let res = client.send_delete(&format!("{ENDPOINT}/{}", cargo.id)).await;
      test_status_code!(http::StatusCode::NOT_FOUND, res.status(), "delete");
      let res = client
        .send_get(&format!("{ENDPOINT}/{}/orders", cargo.id), None::<String>)
        .await;
      test_status_code!(http::StatusCode::NOT_FOUND, res.status(), "orders");
    }

    #[ntex::test]
    async fn assign_unknown_cargo_or_order() {
      let system = gen_store_test_system().await;
      let client = &system.client;
      let res = client
        .send_post(
          &format!("{ENDPOINT}/{}/orders", i32::MAX),
          Some(json!({ "orderIds": [1] })),
        )
        .await;
      test_status_code!(http::StatusCode::NOT_FOUND, res.status(), "assign");
      let cargo = create(client, &format!("UNK{}", unique_suffix())).await;
      let res = client
        .send_post(
          &format!("{ENDPOINT}/{}/orders", cargo.id),
          Some(json!({ "orderIds": [i32::MAX] })),
        )
        .await;
      test_status_code!(http::StatusCode::BAD_REQUEST, res.status(), "assign");
      assert_eq!(count_cargo_links(&system.state, cargo.id).await, 0);
      client.send_delete(&format!("{ENDPOINT}/{}", cargo.id)).await;
    }

    #[ntex::test]
    async fn create_with_orders() {
      let system = gen_store_test_system().await;
      let client = &system.client;
      let suffix = unique_suffix();
      let o1 = seed_order(&system.state, &format!("CO-{suffix}")).await;
      let res = client
        .send_post(
          ENDPOINT,
          Some(json!({ "cargo_no": format!("CW{suffix}"), "orders": [o1, o1] })),
        )
        .await;
      test_status_code!(http::StatusCode::CREATED, res.status(), "create");
      let body = TestClient::res_json::<ApiResponse<Cargo>>(res).await;
      let cargo = body.data.expect("Expect created cargo");
      assert_eq!(count_cargo_links(&system.state, cargo.id).await, 1);
      client.send_delete(&format!("{ENDPOINT}/{}", cargo.id)).await;
    }

    async fn create_with(
      client: &TestClient,
      payload: serde_json::Value,
    ) -> Cargo {
      let res = client.send_post(ENDPOINT, Some(payload)).await;
      test_status_code!(http::StatusCode::CREATED, res.status(), "create");
      let body = TestClient::res_json::<ApiResponse<Cargo>>(res).await;
      body.data.expect("Expect created cargo")
    }

    async fn search(
      client: &TestClient,
      term: &str,
    ) -> (Vec<Cargo>, cargohub_stubs::generic::Pagination) {
      let res = client
        .send_get(ENDPOINT, Some(&[("search", term.to_owned())]))
        .await;
      test_status_code!(http::StatusCode::OK, res.status(), "list");
      let body = TestClient::res_json::<ApiResponse<Vec<Cargo>>>(res).await;
      (
        body.data.expect("Expect cargos"),
        body.pagination.expect("Expect pagination"),
      )
    }

    #[ntex::test]
    async fn search_and_pagination() {
      let system = gen_store_test_system().await;
      let client = &system.client;
      let suffix = unique_suffix();
      let cargo = create_with(
        client,
        json!({
          "cargo_no": format!("SRC{suffix}"),
          "status": format!("Open{suffix}"),
        }),
      )
      .await;
      let noted = create_with(
        client,
        json!({
          "cargo_no": format!("NTA{suffix}"),
          "note": format!("fragile-{suffix}"),
        }),
      )
      .await;
      let tracked = create_with(
        client,
        json!({
          "cargo_no": format!("TRK{suffix}"),
          "tracking_remark": format!("customs-hold-{suffix}"),
        }),
      )
      .await;
      let other = create(client, &format!("OTH{suffix}")).await;
      let res = client
        .send_get(
          ENDPOINT,
          Some(&[("search", format!("SRC{suffix}")), ("limit", "150".into())]),
        )
        .await;
      test_status_code!(http::StatusCode::OK, res.status(), "list");
      let body = TestClient::res_json::<ApiResponse<Vec<Cargo>>>(res).await;
      let pagination = body.pagination.expect("Expect pagination");
      assert_eq!(pagination.limit, 100);
      assert_eq!(pagination.page, 1);
      assert_eq!(pagination.total_records, 1);
      assert_eq!(pagination.total_pages, 1);
      let items = body.data.expect("Expect cargos");
      assert_eq!(items.len(), 1);
      assert_eq!(items[0].id, cargo.id);
      // Each searchable column matches on its own
      for (term, expected) in [
        (format!("Open{suffix}"), cargo.id),
        (format!("fragile-{suffix}"), noted.id),
        (format!("hold-{suffix}"), tracked.id),
      ] {
        let (items, pagination) = search(client, &term).await;
        assert_eq!(pagination.total_records, 1, "search {term}");
        assert_eq!(items[0].id, expected, "search {term}");
      }
      // A term shared by every cargo_no returns them all, newest first
      let (items, pagination) = search(client, &suffix).await;
      assert_eq!(pagination.total_records, 4);
      let ids = items.iter().map(|c| c.id).collect::<Vec<_>>();
      assert_eq!(ids, vec![other.id, tracked.id, noted.id, cargo.id]);
      let res = client
        .send_get(
          ENDPOINT,
          Some(&[("search", "Open".to_owned()), ("page", "0".into())]),
        )
        .await;
      let body = TestClient::res_json::<ApiResponse<Vec<Cargo>>>(res).await;
      assert_eq!(body.pagination.expect("Expect pagination").page, 1);
      let items = body.data.expect("Expect cargos");
      assert!(items.windows(2).all(|w| w[0].id > w[1].id));
      for id in [cargo.id, noted.id, tracked.id, other.id] {
        client.send_delete(&format!("{ENDPOINT}/{id}")).await;
      }
    }
  }
}

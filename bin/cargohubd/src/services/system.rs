use ntex::web;

use cargohub_error::http::HttpResult;
use cargohub_stubs::generic::ApiResponse;
use cargohub_stubs::system::BinaryInfo;

use crate::version;

/// Ping the daemon to check if it is up
#[web::head("/_ping")]
pub async fn head_ping() -> HttpResult<web::HttpResponse> {
  Ok(web::HttpResponse::Accepted().into())
}

/// Version information of the running binary
#[web::get("/version")]
pub async fn get_version() -> HttpResult<web::HttpResponse> {
  Ok(web::HttpResponse::Ok().json(&ApiResponse::data(BinaryInfo {
    arch: version::ARCH.to_owned(),
    channel: version::CHANNEL.to_owned(),
    version: version::VERSION.to_owned(),
    commit_id: version::COMMIT_ID.to_owned(),
  })))
}

pub fn ntex_config(config: &mut web::ServiceConfig) {
  config.service(head_ping);
  config.service(get_version);
}

#[cfg(test)]
mod tests {
  use ntex::http;

  use cargohub_stubs::generic::ApiResponse;
  use cargohub_stubs::system::BinaryInfo;

  use crate::version;
  use crate::utils::tests::*;

  #[ntex::test]
  async fn ping() {
    let client = gen_default_test_client();
    let res = client.send_head("/_ping").await;
    test_status_code!(http::StatusCode::ACCEPTED, res.status(), "ping");
  }

  #[ntex::test]
  async fn get_version() {
    let client = gen_default_test_client();
    let res = client.send_get("/version", None::<String>).await;
    test_status_code!(http::StatusCode::OK, res.status(), "version");
    let body = TestClient::res_json::<ApiResponse<BinaryInfo>>(res).await;
    assert!(body.success);
    let info = body.data.expect("Expect version data");
    assert_eq!(info.version, version::VERSION);
    assert_eq!(info.arch, version::ARCH);
  }
}

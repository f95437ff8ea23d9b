use ntex::web::test::TestServer;
use ntex::http::client::{ClientRequest, ClientResponse};

#[macro_export]
macro_rules! test_status_code {
  ($expected:expr,$current:expr,$context:expr) => {{
    assert_eq!(
      $expected, $current,
      "Expect {} to return status {} got: {}",
      $context, $expected, $current,
    );
  }};
}

pub use test_status_code;

/// Thin wrapper around a [TestServer] sending json requests,
/// optionally authenticated with a session token.
pub struct TestClient {
  srv: TestServer,
  session_token: Option<String>,
}

impl TestClient {
  pub fn new(srv: TestServer) -> Self {
    Self {
      srv,
      session_token: None,
    }
  }

  pub fn with_session(mut self, token: &str) -> Self {
    self.session_token = Some(token.to_owned());
    self
  }

  fn authorize(&self, req: ClientRequest) -> ClientRequest {
    match &self.session_token {
      Some(token) => req.bearer_auth(token),
      None => req,
    }
  }

  pub fn get(&self, url: &str) -> ClientRequest {
    self.srv.get(url)
  }

  pub fn head(&self, url: &str) -> ClientRequest {
    self.srv.head(url)
  }

  pub fn post(&self, url: &str) -> ClientRequest {
    self.authorize(self.srv.post(url))
  }

  pub fn put(&self, url: &str) -> ClientRequest {
    self.authorize(self.srv.put(url))
  }

  pub fn delete(&self, url: &str) -> ClientRequest {
    self.authorize(self.srv.delete(url))
  }

  pub async fn send_get<Q>(&self, url: &str, query: Option<Q>) -> ClientResponse
  where
    Q: serde::Serialize,
  {
    let mut req = self.get(url);
    if let Some(query) = query {
      req = req.query(&query).unwrap_or_else(|err| {
        panic!("Failed to serialize query GET {url}: {err}")
      })
    }
    req
      .send()
      .await
      .unwrap_or_else(|err| panic!("Failed to send GET {url}: {err}"))
  }

  pub async fn send_head(&self, url: &str) -> ClientResponse {
    self
      .head(url)
      .send()
      .await
      .unwrap_or_else(|err| panic!("Failed to send HEAD {url}: {err}"))
  }

  pub async fn send_post<B>(&self, url: &str, body: Option<B>) -> ClientResponse
  where
    B: serde::Serialize,
  {
    let req = self.post(url);
    match body {
      None => req
        .send()
        .await
        .unwrap_or_else(|err| panic!("Failed to send POST {url}: {err}")),
      Some(body) => req.send_json(&body).await.unwrap_or_else(|err| {
        panic!("Failed to send with body POST {url}: {err}")
      }),
    }
  }

  pub async fn send_put<B>(&self, url: &str, body: Option<B>) -> ClientResponse
  where
    B: serde::Serialize,
  {
    let req = self.put(url);
    match body {
      None => req
        .send()
        .await
        .unwrap_or_else(|err| panic!("Failed to send PUT {url}: {err}")),
      Some(body) => req.send_json(&body).await.unwrap_or_else(|err| {
        panic!("Failed to send with body PUT {url}: {err}")
      }),
    }
  }

  /// Send a raw body, used to check how malformed payloads are reported
  pub async fn send_raw(
    &self,
    req: ClientRequest,
    body: &'static str,
  ) -> ClientResponse {
    req
      .header("Content-Type", "application/json")
      .send_body(body)
      .await
      .unwrap_or_else(|err| panic!("Failed to send raw body: {err}"))
  }

  pub async fn send_delete(&self, url: &str) -> ClientResponse {
    self
      .delete(url)
      .send()
      .await
      .unwrap_or_else(|err| panic!("Failed to send DELETE {url}: {err}"))
  }

  pub async fn res_json<R>(mut res: ClientResponse) -> R
  where
    R: serde::de::DeserializeOwned + Send + 'static,
  {
    res
      .json::<R>()
      .limit(20_000_000)
      .await
      .unwrap_or_else(|err| panic!("Failed to parse json response: {err}"))
  }
}

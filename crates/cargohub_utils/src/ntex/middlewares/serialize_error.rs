use ntex::web;
use ntex::http;
use ntex::util::BytesMut;
use ntex::service::{Middleware, Service, ServiceCtx};
use ntex::web::{WebRequest, WebResponse, Error, ErrorRenderer};
use futures::StreamExt;

/// Middleware to convert the default ntex client errors (payload, query
/// string or path extraction) from text/plain to the json error envelope
pub struct SerializeError;

impl<S> Middleware<S> for SerializeError {
  type Service = SerializeErrorMiddleware<S>;

  fn create(&self, service: S) -> Self::Service {
    SerializeErrorMiddleware { service }
  }
}

pub struct SerializeErrorMiddleware<S> {
  service: S,
}

impl<S, Err> Service<WebRequest<Err>> for SerializeErrorMiddleware<S>
where
  S: Service<WebRequest<Err>, Response = WebResponse, Error = Error>,
  Err: ErrorRenderer,
{
  type Response = WebResponse;
  type Error = Error;

  async fn call(
    &self,
    req: WebRequest<Err>,
    ctx: ServiceCtx<'_, Self>,
  ) -> Result<Self::Response, Self::Error> {
    let mut res = ctx.call(&self.service, req).await?;
    let status = res.status();
    if !status.is_client_error() {
      return Ok(res);
    }
    let is_plain_text = res
      .headers()
      .get(http::header::CONTENT_TYPE)
      .map(|content_type| content_type == "text/plain; charset=utf-8")
      .unwrap_or(false);
    if !is_plain_text {
      return Ok(res);
    }
    let mut payload = BytesMut::new();
    let mut body = res.take_body();
    while let Some(chunk) = body.next().await {
      let chunk = chunk.unwrap_or_default();
      payload.extend_from_slice(&chunk);
    }
    let message = to_message(&String::from_utf8_lossy(&payload));
    Ok(res.into_response(web::HttpResponse::build(status).json(
      &serde_json::json!({
        "success": false,
        "message": message,
      }),
    )))
  }
}

fn to_message(body: &str) -> String {
  let body = body
    .replace("Json deserialize error:", "payload:")
    .replace("Query deserialize error:", "query:");
  let body = body.trim();
  if body.is_empty() {
    return "Invalid request".to_owned();
  }
  body.to_owned()
}

#[cfg(test)]
mod tests {
  use super::to_message;

  #[test]
  fn message_is_rewritten() {
    assert_eq!(
      to_message("Json deserialize error: missing field `orderIds`"),
      "payload: missing field `orderIds`"
    );
    assert_eq!(to_message("  "), "Invalid request");
  }
}

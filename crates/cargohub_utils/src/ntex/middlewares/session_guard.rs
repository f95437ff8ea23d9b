use std::rc::Rc;

use ntex::web;
use ntex::http::{self, HttpMessage, Method};
use subtle::ConstantTimeEq;
use ntex::service::{Middleware, Service, ServiceCtx};
use ntex::web::{WebRequest, WebResponse, Error, ErrorRenderer};

/// Reject mutating requests that do not carry the configured session token.
///
/// The token is read from `Authorization: Bearer <token>` or from a
/// `session=<token>` cookie. Without a configured token every request
/// goes through.
#[derive(Clone, Default)]
pub struct SessionGuard {
  token: Option<Rc<str>>,
}

impl SessionGuard {
  pub fn new(token: Option<&str>) -> Self {
    Self {
      token: token.filter(|t| !t.is_empty()).map(Rc::from),
    }
  }
}

impl<S> Middleware<S> for SessionGuard {
  type Service = SessionGuardMiddleware<S>;

  fn create(&self, service: S) -> Self::Service {
    SessionGuardMiddleware {
      service,
      token: self.token.clone(),
    }
  }
}

pub struct SessionGuardMiddleware<S> {
  service: S,
  token: Option<Rc<str>>,
}

impl<S, Err> Service<WebRequest<Err>> for SessionGuardMiddleware<S>
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
    let Some(token) = &self.token else {
      return ctx.call(&self.service, req).await;
    };
    if !is_mutating(req.method()) {
      return ctx.call(&self.service, req).await;
    }
    let bearer = req
      .headers()
      .get(http::header::AUTHORIZATION)
      .and_then(|value| value.to_str().ok())
      .and_then(parse_bearer)
      .is_some_and(|bearer| token_matches(bearer, token));
    let granted = bearer
      || req
        .cookie("session")
        .is_some_and(|cookie| token_matches(cookie.value().trim(), token));
    if granted {
      return ctx.call(&self.service, req).await;
    }
    log::warn!(
      "session_guard: rejected {} {}",
      req.method(),
      req.path()
    );
    Ok(req.into_response(web::HttpResponse::Unauthorized().json(
      &serde_json::json!({
        "success": false,
        "message": "A valid session is required",
      }),
    )))
  }
}

fn is_mutating(method: &Method) -> bool {
  matches!(
    *method,
    Method::POST | Method::PUT | Method::PATCH | Method::DELETE
  )
}

fn parse_bearer(value: &str) -> Option<&str> {
  let (scheme, token) = value.trim().split_once(' ')?;
  if !scheme.eq_ignore_ascii_case("bearer") {
    return None;
  }
  let token = token.trim();
  (!token.is_empty()).then_some(token)
}

/// Constant time comparison with the configured token
fn token_matches(candidate: &str, token: &str) -> bool {
  !candidate.is_empty()
    && bool::from(candidate.as_bytes().ct_eq(token.as_bytes()))
}

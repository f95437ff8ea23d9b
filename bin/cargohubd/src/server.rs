use ntex::web;
use ntex_cors::Cors;

use cargohub_utils::ntex::middlewares;

use crate::services;
use crate::models::SystemState;

/// ## Gen
///
/// Generate the http server and bind it to the configured hosts.
///
/// ## Arguments
///
/// - [system_state](SystemState) - The state shared by the handlers
///
/// ## Returns
///
/// - [Result](Result) - The result of the operation
///   - [Ok](ntex::server::Server) - The http server
///   - [Err](std::io::Error) - A host is invalid or cannot be bound
///
pub async fn gen(
  system_state: SystemState,
) -> std::io::Result<ntex::server::Server> {
  log::info!("server: preparing");
  let hosts = system_state.config.hosts.clone();
  if system_state.config.session_token.is_none() {
    log::warn!("server: no session token configured, writes are not guarded");
  }
  let mut server = web::HttpServer::new(move || {
    let session_token = system_state.config.session_token.clone();
    web::App::new()
      .state(system_state.clone())
      .state(web::types::JsonConfig::default().limit(4_000_000))
      .wrap(Cors::new().finish())
      .wrap(web::middleware::Logger::default())
      .wrap(middlewares::SerializeError)
      .wrap(middlewares::SessionGuard::new(session_token.as_deref()))
      .configure(services::ntex_config)
      .default_service(web::route().to(services::unhandled))
  });
  for host in &hosts {
    if let Some(addr) = host.strip_prefix("unix://") {
      server = match server.bind_uds(addr) {
        Err(err) => {
          log::error!("server: error binding to unix socket {addr}: {err}");
          return Err(err);
        }
        Ok(server) => server,
      };
      log::info!("server: listening on {host}");
    } else if let Some(addr) = host.strip_prefix("tcp://") {
      server = match server.bind(addr) {
        Err(err) => {
          log::error!("server: error binding to tcp host {addr}: {err}");
          return Err(err);
        }
        Ok(server) => server,
      };
      log::info!("server: listening on {host}");
    } else {
      log::error!("server: {host} is not valid use tcp:// or unix://");
      return Err(std::io::Error::new(
        std::io::ErrorKind::InvalidInput,
        "Invalid protocol use tcp:// or unix://",
      ));
    }
  }
  log::info!("server: ready");
  Ok(server.run())
}

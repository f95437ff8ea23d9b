use clap::Parser;

use cargohub_utils::logger;

mod cli;
mod error;
mod schema;
mod models;
mod version;
mod config;
mod repositories;
mod utils;
mod server;
mod services;

/// Back office daemon managing cargo shipments, their cargo types
/// and the customer orders they carry
#[ntex::main]
async fn main() -> std::io::Result<()> {
  // Parse command line arguments
  let args = cli::Cli::parse();
  logger::enable_logger("cargohubd");
  log::info!(
    "cargohubd_{}_{}_v{}:{}",
    version::ARCH,
    version::CHANNEL,
    version::VERSION,
    version::COMMIT_ID
  );
  // Init config by comparing command line arguments and config file
  let config = match config::init(&args) {
    Err(err) => err.print_and_exit(),
    Ok(config) => config,
  };
  // Connect to the store and run the migrations
  let system_state = match models::SystemState::new(&config).await {
    Err(err) => error::CliError::from(err).print_and_exit(),
    Ok(system_state) => system_state,
  };
  // Start http server and wait for shutdown
  match server::gen(system_state).await {
    Err(err) => {
      log::error!("server: {err}");
      std::process::exit(1);
    }
    Ok(server) => {
      if let Err(err) = server.await {
        log::error!("server: {err}");
        std::process::exit(1);
      }
    }
  }
  log::info!("shutdown");
  Ok(())
}

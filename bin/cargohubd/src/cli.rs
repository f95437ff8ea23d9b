use clap::Parser;

/// Cargohub Daemon - Back office api for cargo shipments
#[derive(Debug, Clone, Parser)]
#[command(name = "cargohubd")]
#[command(author = "cargohub contributors")]
#[command(version)]
pub struct Cli {
  /// Hosts to listen to use tcp:// and unix:// [default: tcp://0.0.0.0:8585]
  #[clap(short = 'H', long = "hosts")]
  pub(crate) hosts: Option<Vec<String>>,
  /// Postgres connection url of the store
  #[clap(long, env = "DATABASE_URL")]
  pub(crate) database_url: Option<String>,
  /// Maximum number of store connections [default: 10]
  #[clap(long)]
  pub(crate) pool_size: Option<u32>,
  /// Token required on POST, PUT, PATCH and DELETE requests
  #[clap(long, env = "CARGOHUB_SESSION_TOKEN", hide_env_values = true)]
  pub(crate) session_token: Option<String>,
  /// Config directory
  #[clap(long, default_value = "/etc/cargohub")]
  pub(crate) conf_dir: String,
}

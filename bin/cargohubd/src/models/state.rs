use cargohub_error::io::IoResult;
use cargohub_stubs::config::DaemonConfig;

use crate::{utils, version};

use super::Pool;

/// State shared between every handler
#[derive(Clone)]
pub struct SystemState {
  /// The database connection pool
  pub pool: Pool,
  /// The config of the daemon
  pub config: DaemonConfig,
  /// Version of the running daemon
  pub version: String,
}

impl SystemState {
  /// Connect to the store, run the pending migrations and build the state
  pub async fn new(conf: &DaemonConfig) -> IoResult<Self> {
    let pool = utils::store::init(conf).await?;
    Ok(Self::with_pool(pool, conf))
  }

  pub fn with_pool(pool: Pool, conf: &DaemonConfig) -> Self {
    Self {
      pool,
      config: conf.to_owned(),
      version: version::VERSION.to_owned(),
    }
  }
}

use cargohub_stubs::config::{DaemonConfig, DaemonConfigFile, default_host};

use crate::cli::Cli;
use crate::error::CliError;

/// Default size of the store connection pool
const DEFAULT_POOL_SIZE: u32 = 10;

fn gen_daemon_conf(
  args: &Cli,
  config: &DaemonConfigFile,
) -> Result<DaemonConfig, CliError> {
  let hosts = if let Some(ref hosts) = args.hosts {
    hosts.to_owned()
  } else if let Some(ref hosts) = config.hosts {
    hosts.to_owned()
  } else {
    vec![default_host()]
  };
  let database_url = args
    .database_url
    .clone()
    .or_else(|| config.database_url.clone())
    .filter(|url| !url.trim().is_empty())
    .ok_or_else(|| {
      CliError::new(
        1,
        "Missing database url, use --database-url or DATABASE_URL",
      )
    })?;
  let pool_size = args
    .pool_size
    .or(config.pool_size)
    .unwrap_or(DEFAULT_POOL_SIZE);
  if pool_size == 0 {
    return Err(CliError::new(1, "Pool size must be greater than 0"));
  }
  let session_token = args
    .session_token
    .clone()
    .or_else(|| config.session_token.clone())
    .filter(|token| !token.is_empty());
  Ok(DaemonConfig {
    hosts,
    database_url,
    pool_size,
    session_token,
  })
}

fn read_config_file(config_dir: &str) -> Result<DaemonConfigFile, CliError> {
  let config_path = std::path::Path::new(config_dir).join("cargohub.conf");
  if !config_path.exists() {
    return Ok(DaemonConfigFile::default());
  }
  let content = std::fs::read_to_string(&config_path).map_err(|err| {
    CliError::new(
      1,
      format!(
        "Error while reading config file at {}: {err}",
        config_path.display()
      ),
    )
  })?;
  let config =
    serde_yaml::from_str::<DaemonConfigFile>(&content).map_err(|err| {
      CliError::new(
        1,
        format!(
          "Error while parsing config file at {}: {err}",
          config_path.display()
        ),
      )
    })?;
  Ok(config)
}

/// ## Init Daemon config
///
/// Read `<conf_dir>/cargohub.conf` when it exists and merge it with the
/// command line arguments, with a priority to the arguments.
///
/// ## Arguments
///
/// - [args](Cli) - Cli arguments
///
/// ## Returns
///
/// - [Result](Result) - The result of the operation
///   - [Ok](DaemonConfig) - The merged config
///   - [Err](CliError) - The file is invalid or the database url is missing
///
pub fn init(args: &Cli) -> Result<DaemonConfig, CliError> {
  let file_config = read_config_file(&args.conf_dir)?;
  // Merge cli args and config file with priority to args
  gen_daemon_conf(args, &file_config)
}

/// Config unit test
#[cfg(test)]
mod tests {
  use clap::Parser;

  use super::*;

  fn write_conf(dir: &std::path::Path, content: &str) {
    std::fs::create_dir_all(dir).unwrap();
    std::fs::write(dir.join("cargohub.conf"), content).unwrap();
  }

  /// Test merge config
  #[test]
  fn merge_config() {
    let mut args = Cli::parse_from([
      "cargohubd",
      "--database-url",
      "postgres://cli/cargohub",
      "--conf-dir",
      "/nonexistent",
    ]);
    args.session_token = None;
    let file = DaemonConfigFile {
      hosts: Some(vec![String::from("unix:///run/cargohub.sock")]),
      database_url: Some(String::from("postgres://file/cargohub")),
      pool_size: Some(3),
      session_token: Some(String::from("from-file")),
    };
    let config = gen_daemon_conf(&args, &file).unwrap();
    assert_eq!(config.hosts, vec![String::from("unix:///run/cargohub.sock")]);
    assert_eq!(config.database_url, "postgres://cli/cargohub");
    assert_eq!(config.pool_size, 3);
    assert_eq!(config.session_token.as_deref(), Some("from-file"));
  }

  /// Defaults apply when neither the cli nor the file set a value
  #[test]
  fn merge_defaults() {
    let args = Cli::parse_from([
      "cargohubd",
      "--database-url",
      "postgres://cli/cargohub",
      "--session-token",
      "",
    ]);
    let config = gen_daemon_conf(&args, &DaemonConfigFile::default()).unwrap();
    assert_eq!(config.hosts, vec![default_host()]);
    assert_eq!(config.pool_size, DEFAULT_POOL_SIZE);
    assert_eq!(config.session_token, None);
  }

  /// The store url is required
  #[test]
  fn missing_database_url() {
    let mut args = Cli::parse_from(["cargohubd"]);
    args.database_url = None;
    let err = gen_daemon_conf(&args, &DaemonConfigFile::default())
      .expect_err("Expect missing database url to fail");
    assert_eq!(err.code, 1);
  }

  /// Test config file read from the conf dir
  #[test]
  fn read_from_conf_dir() {
    let dir = std::env::temp_dir().join(format!(
      "cargohub-conf-{}",
      std::process::id()
    ));
    write_conf(
      &dir,
      "hosts:\n  - tcp://127.0.0.1:9090\ndatabase_url: postgres://file/db\n",
    );
    let file = read_config_file(dir.to_str().unwrap()).unwrap();
    assert_eq!(file.hosts, Some(vec![String::from("tcp://127.0.0.1:9090")]));
    assert_eq!(file.database_url.as_deref(), Some("postgres://file/db"));
    assert_eq!(file.pool_size, None);
    write_conf(&dir, "pool_size: [1]\n");
    assert!(read_config_file(dir.to_str().unwrap()).is_err());
    std::fs::remove_dir_all(&dir).unwrap();
  }

  /// Missing file falls back to defaults
  #[test]
  fn missing_conf_dir() {
    let file = read_config_file("/nonexistent/cargohub").unwrap();
    assert_eq!(file, DaemonConfigFile::default());
  }
}

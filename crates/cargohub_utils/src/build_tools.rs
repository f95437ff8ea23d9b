use std::io::{Result, Error, ErrorKind};

/// ## Set env git commit hash
///
/// Execute the git command to extract the hash of the current commit
/// and set it as an environment variable for the produced binary.
/// Outside of a git checkout the hash is `<unknown>`.
///
pub fn set_env_git_commit_hash() -> Result<()> {
  let git_hash = std::process::Command::new("git")
    .args(["rev-parse", "HEAD"])
    .output()
    .ok()
    .filter(|output| output.status.success())
    .and_then(|output| String::from_utf8(output.stdout).ok())
    .map(|hash| hash.trim().to_owned())
    .filter(|hash| !hash.is_empty())
    .unwrap_or_else(|| "<unknown>".to_owned());
  println!("cargo:rustc-env=GIT_HASH={git_hash}");
  Ok(())
}

/// ## Set env target arch
///
/// Set the target arch as an environment variable for the produced binary
///
pub fn set_env_target_arch() -> Result<()> {
  let arch = std::env::var("CARGO_CFG_TARGET_ARCH")
    .map_err(|e| Error::new(ErrorKind::Other, e))?;
  println!("cargo:rustc-env=TARGET_ARCH={arch}");
  Ok(())
}

/// ## Set channel
///
/// Set the release channel as an environment variable for the produced binary.
/// `CARGOHUB_CHANNEL` wins, otherwise `nightly` when the crate is built
/// with its `dev` feature and `stable` when it is not.
///
pub fn set_channel() -> Result<()> {
  let default_channel = if std::env::var("CARGO_FEATURE_DEV").is_ok() {
    "nightly"
  } else {
    "stable"
  };
  let channel =
    std::env::var("CARGOHUB_CHANNEL").unwrap_or(default_channel.into());
  println!("cargo:rerun-if-env-changed=CARGOHUB_CHANNEL");
  println!("cargo:rustc-env=CHANNEL={channel}");
  Ok(())
}

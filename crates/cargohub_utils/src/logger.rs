/// Build the env logger from the `LOG_LEVEL` variable,
/// defaulting to `info` for the given binary.
pub fn enable_logger(bin_name: &str) {
  if std::env::var("LOG_LEVEL").is_err() {
    std::env::set_var("LOG_LEVEL", format!("{bin_name}=info,warn,error"));
  }
  let is_test = std::env::var("TEST").is_ok();
  // A logger may already be installed when running tests
  let _ = env_logger::Builder::new()
    .parse_env("LOG_LEVEL")
    .format_target(false)
    .is_test(is_test)
    .try_init();
}

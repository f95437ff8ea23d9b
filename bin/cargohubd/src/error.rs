use cargohub_error::io::IoError;

/// Error raised while booting, printed before exiting with `code`
#[derive(Debug)]
pub struct CliError {
  pub(crate) code: i32,
  pub(crate) msg: String,
}

impl CliError {
  pub fn new<T>(code: i32, msg: T) -> Self
  where
    T: Into<String>,
  {
    Self {
      code,
      msg: msg.into(),
    }
  }

  pub fn print_and_exit(&self) -> ! {
    eprintln!("{self}");
    std::process::exit(self.code);
  }
}

impl std::fmt::Display for CliError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.msg)
  }
}

impl std::error::Error for CliError {}

impl From<IoError> for CliError {
  fn from(err: IoError) -> Self {
    Self::new(err.inner.raw_os_error().unwrap_or(1), err.to_string())
  }
}

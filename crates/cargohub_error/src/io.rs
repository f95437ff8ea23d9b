#[derive(Debug)]
pub struct IoError {
  pub context: Option<String>,
  pub inner: std::io::Error,
}

impl Clone for IoError {
  fn clone(&self) -> Self {
    Self {
      context: self.context.clone(),
      inner: std::io::Error::new(self.inner.kind(), self.inner.to_string()),
    }
  }
}

impl IoError {
  pub fn new<T>(context: T, inner: std::io::Error) -> Self
  where
    T: Into<String>,
  {
    Self {
      context: Some(context.into()),
      inner,
    }
  }

  pub fn without_context(inner: std::io::Error) -> Self {
    Self {
      context: None,
      inner,
    }
  }

  /// Data coming from the store or a payload is malformed or violates a
  /// constraint
  pub fn invalid_data<C, M>(context: C, message: M) -> Self
  where
    C: ToString,
    M: ToString,
  {
    Self::new(
      context.to_string(),
      std::io::Error::new(std::io::ErrorKind::InvalidData, message.to_string()),
    )
  }

  /// A required input is missing or empty
  pub fn invalid_input<C, M>(context: C, message: M) -> Self
  where
    C: ToString,
    M: ToString,
  {
    Self::new(
      context.to_string(),
      std::io::Error::new(
        std::io::ErrorKind::InvalidInput,
        message.to_string(),
      ),
    )
  }

  pub fn not_found<C, M>(context: C, message: M) -> Self
  where
    C: ToString,
    M: ToString,
  {
    Self::new(
      context.to_string(),
      std::io::Error::new(std::io::ErrorKind::NotFound, message.to_string()),
    )
  }

  pub fn interrupted<C, M>(context: C, message: M) -> Self
  where
    C: ToString,
    M: ToString,
  {
    Self::new(
      context.to_string(),
      std::io::Error::new(std::io::ErrorKind::Interrupted, message.to_string()),
    )
  }

  pub fn not_connected<C, M>(context: C, message: M) -> Self
  where
    C: ToString,
    M: ToString,
  {
    Self::new(
      context.to_string(),
      std::io::Error::new(
        std::io::ErrorKind::NotConnected,
        message.to_string(),
      ),
    )
  }

  pub fn context(&self) -> Option<&str> {
    self.context.as_deref()
  }

  pub fn kind(&self) -> std::io::ErrorKind {
    self.inner.kind()
  }

  pub fn into_inner(self) -> std::io::Error {
    self.inner
  }

  pub fn exit(&self) -> ! {
    std::process::exit(self.inner.raw_os_error().unwrap_or(1));
  }

  pub fn print_and_exit(&self) -> ! {
    eprintln!("{self}");
    self.exit();
  }
}

impl std::fmt::Display for IoError {
  fn fmt(
    &self,
    f: &mut std::fmt::Formatter<'_>,
  ) -> Result<(), std::fmt::Error> {
    use std::io::ErrorKind::*;

    let mut message;
    let message = if self.inner.raw_os_error().is_some() {
      // Errors coming straight from the OS get a stable message
      // without the "(os error X)" suffix.
      match self.inner.kind() {
        NotFound => "No such file or directory",
        PermissionDenied => "Permission denied",
        ConnectionRefused => "Connection refused",
        ConnectionReset => "Connection reset",
        ConnectionAborted => "Connection aborted",
        NotConnected => "Not connected",
        AddrInUse => "Address in use",
        AddrNotAvailable => "Address not available",
        BrokenPipe => "Broken pipe",
        AlreadyExists => "Already exists",
        WouldBlock => "Would block",
        InvalidInput => "Invalid input",
        InvalidData => "Invalid data",
        TimedOut => "Timed out",
        Interrupted => "Interrupted",
        UnexpectedEof => "Unexpected end of file",
        _ => {
          message = strip_errno(&self.inner);
          capitalize(&mut message);
          &message
        }
      }
    } else {
      message = self.inner.to_string();
      capitalize(&mut message);
      &message
    };
    if let Some(ctx) = &self.context {
      write!(f, "{ctx}: {message}")
    } else {
      write!(f, "{message}")
    }
  }
}

impl std::error::Error for IoError {}

/// Capitalize the first character of an ASCII string.
fn capitalize(text: &mut str) {
  if let Some(first) = text.get_mut(..1) {
    first.make_ascii_uppercase();
  }
}

/// Strip the trailing " (os error XX)" from io error strings.
fn strip_errno(err: &std::io::Error) -> String {
  let mut msg = err.to_string();
  if let Some(pos) = msg.find(" (os error ") {
    msg.truncate(pos);
  }
  msg
}

pub type IoResult<T, E = IoError> = Result<T, E>;

/// Enables the conversion from foreign errors into [`IoError`]
/// while attaching a context, usually the name of the entity involved.
pub trait FromIo<T> {
  fn map_err_context<C>(self, context: impl FnOnce() -> C) -> T
  where
    C: ToString + std::fmt::Display;
}

impl FromIo<IoError> for IoError {
  fn map_err_context<C>(self, context: impl FnOnce() -> C) -> IoError
  where
    C: ToString + std::fmt::Display,
  {
    IoError {
      context: Some((context)().to_string()),
      inner: self.into_inner(),
    }
  }
}

impl FromIo<Box<IoError>> for std::io::Error {
  fn map_err_context<C>(self, context: impl FnOnce() -> C) -> Box<IoError>
  where
    C: ToString + std::fmt::Display,
  {
    Box::new(IoError {
      context: Some((context)().to_string()),
      inner: self,
    })
  }
}

impl From<Box<IoError>> for IoError {
  fn from(f: Box<IoError>) -> Self {
    *f
  }
}

impl From<std::io::Error> for IoError {
  fn from(f: std::io::Error) -> Self {
    Self {
      context: None,
      inner: f,
    }
  }
}

impl From<IoError> for std::io::Error {
  fn from(f: IoError) -> Self {
    f.inner
  }
}

#[cfg(feature = "serde_json")]
impl FromIo<Box<IoError>> for serde_json::Error {
  fn map_err_context<C>(self, context: impl FnOnce() -> C) -> Box<IoError>
  where
    C: ToString + std::fmt::Display,
  {
    Box::new(IoError {
      context: Some((context)().to_string()),
      inner: std::io::Error::new(std::io::ErrorKind::InvalidData, self),
    })
  }
}

#[cfg(feature = "serde_yaml")]
impl FromIo<Box<IoError>> for serde_yaml::Error {
  fn map_err_context<C>(self, context: impl FnOnce() -> C) -> Box<IoError>
  where
    C: ToString + std::fmt::Display,
  {
    Box::new(IoError {
      context: Some((context)().to_string()),
      inner: std::io::Error::new(std::io::ErrorKind::InvalidData, self),
    })
  }
}

#[cfg(feature = "http")]
impl From<crate::http::HttpError> for IoError {
  fn from(f: crate::http::HttpError) -> Self {
    Self {
      context: None,
      inner: std::io::Error::new(std::io::ErrorKind::InvalidData, f),
    }
  }
}

#[cfg(feature = "diesel")]
impl FromIo<Box<IoError>> for diesel::result::Error {
  fn map_err_context<C>(self, context: impl FnOnce() -> C) -> Box<IoError>
  where
    C: ToString + std::fmt::Display,
  {
    let inner = match self {
      diesel::result::Error::NotFound => {
        std::io::Error::new(std::io::ErrorKind::NotFound, self)
      }
      diesel::result::Error::DatabaseError(dberr, infoerr) => {
        let msg = match infoerr.details() {
          Some(details) => format!("{}: {details}", infoerr.message()),
          None => infoerr.message().to_owned(),
        };
        use diesel::result::DatabaseErrorKind::*;
        let kind = match dberr {
          UniqueViolation => std::io::ErrorKind::AlreadyExists,
          ClosedConnection => std::io::ErrorKind::NotConnected,
          ForeignKeyViolation | NotNullViolation | CheckViolation => {
            std::io::ErrorKind::InvalidData
          }
          // Server side faults, the client cannot fix them
          _ => std::io::ErrorKind::Other,
        };
        std::io::Error::new(kind, msg)
      }
      _ => std::io::Error::new(std::io::ErrorKind::Other, self),
    };
    Box::new(IoError {
      context: Some((context)().to_string()),
      inner,
    })
  }
}

/// Used as the error type of store transactions, errors raised by the
/// transaction itself (begin, commit) get the `Store` context.
#[cfg(feature = "diesel")]
impl From<diesel::result::Error> for IoError {
  fn from(f: diesel::result::Error) -> Self {
    *f.map_err_context(|| "Store")
  }
}

#[cfg(feature = "r2d2")]
impl FromIo<Box<IoError>> for diesel::r2d2::PoolError {
  fn map_err_context<C>(self, context: impl FnOnce() -> C) -> Box<IoError>
  where
    C: ToString + std::fmt::Display,
  {
    Box::new(IoError {
      context: Some((context)().to_string()),
      inner: std::io::Error::new(std::io::ErrorKind::NotConnected, self),
    })
  }
}

#[cfg(feature = "ntex")]
impl From<ntex::http::error::BlockingError<IoError>> for IoError {
  fn from(f: ntex::http::error::BlockingError<IoError>) -> Self {
    match f {
      ntex::http::error::BlockingError::Error(e) => e,
      ntex::http::error::BlockingError::Canceled => {
        IoError::interrupted("Future", "Canceled")
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn display_with_context() {
    let err = IoError::not_found("Cargo", "record not found");
    assert_eq!(err.to_string(), "Cargo: Record not found");
    let err = IoError::without_context(std::io::Error::new(
      std::io::ErrorKind::Other,
      "boom",
    ));
    assert_eq!(err.to_string(), "Boom");
  }

  #[test]
  fn map_err_context_replaces_context() {
    let err = IoError::invalid_input("first", "orderIds must not be empty")
      .map_err_context(|| "CargoOrder");
    assert_eq!(err.context(), Some("CargoOrder"));
    assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput);
  }

  #[cfg(feature = "diesel")]
  #[test]
  fn diesel_errors_keep_their_kind() {
    use diesel::result::{DatabaseErrorKind, Error};

    let err: IoError = Error::NotFound.map_err_context(|| "Cargo").into();
    assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    let err: IoError = Error::DatabaseError(
      DatabaseErrorKind::UniqueViolation,
      Box::new(String::from("duplicate key")),
    )
    .map_err_context(|| "Category")
    .into();
    assert_eq!(err.kind(), std::io::ErrorKind::AlreadyExists);
    let err: IoError = Error::DatabaseError(
      DatabaseErrorKind::ForeignKeyViolation,
      Box::new(String::from("order does not exist")),
    )
    .map_err_context(|| "CargoOrder")
    .into();
    assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
    assert_eq!(err.to_string(), "CargoOrder: Order does not exist");
    for kind in [
      DatabaseErrorKind::NotNullViolation,
      DatabaseErrorKind::CheckViolation,
    ] {
      let err: IoError = Error::DatabaseError(
        kind,
        Box::new(String::from("constraint failed")),
      )
      .map_err_context(|| "Cargo")
      .into();
      assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
    }
    for kind in [
      DatabaseErrorKind::Unknown,
      DatabaseErrorKind::SerializationFailure,
    ] {
      let err: IoError = Error::DatabaseError(
        kind,
        Box::new(String::from("relation \"cargos\" does not exist")),
      )
      .map_err_context(|| "Cargo")
      .into();
      assert_eq!(err.kind(), std::io::ErrorKind::Other);
    }
  }
}

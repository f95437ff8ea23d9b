use cargohub_error::io::{IoError, IoResult};

/// Fail with `InvalidInput` when a required text field is blank
pub fn required_text(context: &str, field: &str, value: &str) -> IoResult<()> {
  if value.trim().is_empty() {
    return Err(IoError::invalid_input(context, format!("{field} is required")));
  }
  Ok(())
}

/// Same as [required_text] for a field that may be omitted,
/// but must not be blank when present
pub fn optional_text(
  context: &str,
  field: &str,
  value: Option<&str>,
) -> IoResult<()> {
  match value {
    Some(value) => required_text(context, field, value),
    None => Ok(()),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn blank_text_is_invalid_input() {
    let err = required_text("Category", "name", "  ").unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput);
    assert_eq!(err.to_string(), "Category: Name is required");
    assert!(required_text("Category", "name", "Food").is_ok());
    assert!(optional_text("CargoType", "type", None).is_ok());
    assert!(optional_text("CargoType", "type", Some("")).is_err());
  }
}

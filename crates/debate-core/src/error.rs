//! Error types for `debate-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("{0} must not be empty")]
  EmptyField(&'static str),

  #[error("Side must be 'for' or 'against'")]
  InvalidSide(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Reject empty or whitespace-only text for a required field.
pub(crate) fn require_text(field: &'static str, value: &str) -> Result<()> {
  if value.trim().is_empty() {
    return Err(Error::EmptyField(field));
  }
  Ok(())
}

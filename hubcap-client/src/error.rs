//! Error taxonomy for the client.
//!
//! Only two things can fail: a required identifier is empty (caught before
//! any request is made) or the transport itself fails. Every received HTTP
//! response, whatever its status, is returned as a successful envelope.

use thiserror::Error;

/// Errors surfaced by the client.
#[derive(Debug, Error)]
pub enum Error {
  /// A required identifier was empty; no request was performed.
  #[error("{0} must not be empty")]
  MissingArgument(&'static str),

  /// The `GITHUB_TOKEN` environment variable is unset or empty.
  #[error("GITHUB_TOKEN not set in environment or empty")]
  MissingToken,

  /// Connection, TLS, or timeout failure reported by the transport.
  #[error(transparent)]
  Transport(#[from] reqwest::Error),
}

/// Fail fast when a required identifier is empty.
pub(crate) fn ensure_arg(name: &'static str, value: &str) -> Result<(), Error> {
  if value.is_empty() {
    return Err(Error::MissingArgument(name));
  }
  Ok(())
}

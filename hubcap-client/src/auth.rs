//! Credential discovery for the client.
//!
//! The tools authenticate with a personal access token taken from the
//! `GITHUB_TOKEN` environment variable; these helpers share that lookup so
//! every consumer reports the same failure the same way.

use std::env;

use crate::GhClient;
use crate::error::Error;

/// Environment variable holding the bearer token.
pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

/// Read the GitHub token from the environment.
pub fn token_from_env() -> Result<String, Error> {
  match env::var(TOKEN_ENV_VAR) {
    Ok(token) if !token.is_empty() => Ok(token),
    _ => Err(Error::MissingToken),
  }
}

/// Create a client authenticated with the token from the environment.
pub fn client_from_env() -> Result<GhClient, Error> {
  GhClient::new(token_from_env()?)
}

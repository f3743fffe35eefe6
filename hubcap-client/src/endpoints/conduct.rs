//! Code of conduct endpoint bindings.

use crate::client::GhClient;
use crate::error::{Error, ensure_arg};
use crate::response::ApiResponse;

impl GhClient {
  /// Retrieve all codes of conduct.
  pub async fn codes_of_conduct(&self) -> Result<ApiResponse, Error> {
    let url = format!("{}/codes_of_conduct", self.base_url);
    self.get(&url).await
  }

  /// Retrieve a code of conduct by its key, e.g. `contributor_covenant`.
  pub async fn code_of_conduct_by_key(&self, key: &str) -> Result<ApiResponse, Error> {
    ensure_arg("key", key)?;

    let url = format!("{}/codes_of_conduct/{}", self.base_url, key);
    self.get(&url).await
  }
}

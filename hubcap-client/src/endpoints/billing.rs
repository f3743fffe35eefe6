//! Billing endpoint binding.

use crate::client::GhClient;
use crate::error::{Error, ensure_arg};
use crate::response::ApiResponse;

impl GhClient {
  /// Retrieve the Actions billing information for an organization.
  pub async fn actions_billing_for_org(&self, org: &str) -> Result<ApiResponse, Error> {
    ensure_arg("org", org)?;

    let url = format!("{}/orgs/{}/settings/billing/actions", self.base_url, org);
    self.get(&url).await
  }
}

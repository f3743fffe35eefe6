//! # User Endpoints
//!
//! Bindings for user accounts: the authenticated user, lookups by username,
//! the block list, followers, and the rate-limit status resource.
//!
//! The blocked-user check answers through the status code alone:
//! 204 means blocked, 404 means not blocked (see
//! [`crate::consts::USER_BLOCKED_STATUS`]). Callers branch on
//! `response.status`, not on the body.

use tracing::instrument;

use crate::client::GhClient;
use crate::error::{Error, ensure_arg};
use crate::options::ListOptions;
use crate::response::ApiResponse;

impl GhClient {
  /// Retrieve account information for the authenticated user.
  #[instrument(skip(self), level = "debug")]
  pub async fn current_user(&self) -> Result<ApiResponse, Error> {
    let url = format!("{}/user", self.base_url);
    self.get(&url).await
  }

  /// Retrieve account information for the given username.
  pub async fn user_by_username(&self, username: &str) -> Result<ApiResponse, Error> {
    ensure_arg("username", username)?;

    let url = format!("{}/users/{}", self.base_url, username);
    self.get(&url).await
  }

  /// Retrieve the hovercard for the given username.
  pub async fn user_hovercard(&self, username: &str) -> Result<ApiResponse, Error> {
    ensure_arg("username", username)?;

    let url = format!("{}/users/{}/hovercard", self.base_url, username);
    self.get(&url).await
  }

  /// List the users blocked by the authenticated user.
  pub async fn list_blocked_users(&self, opts: &ListOptions) -> Result<ApiResponse, Error> {
    let url = format!("{}/user/blocks", self.base_url);
    self.get_paged(url, opts.page_url.as_deref(), opts.query()).await
  }

  /// Check whether the given username is blocked by the authenticated user.
  /// The envelope's status is 204 when blocked and 404 when not.
  pub async fn is_user_blocked(&self, username: &str) -> Result<ApiResponse, Error> {
    ensure_arg("username", username)?;

    let url = format!("{}/user/blocks/{}", self.base_url, username);
    self.get(&url).await
  }

  /// Block the given username.
  pub async fn block_user(&self, username: &str) -> Result<ApiResponse, Error> {
    ensure_arg("username", username)?;

    let url = format!("{}/user/blocks/{}", self.base_url, username);
    self.put(&url, None).await
  }

  /// Unblock the given username.
  pub async fn unblock_user(&self, username: &str) -> Result<ApiResponse, Error> {
    ensure_arg("username", username)?;

    let url = format!("{}/user/blocks/{}", self.base_url, username);
    self.delete(&url).await
  }

  /// List the followers of the authenticated user.
  pub async fn list_followers(&self, opts: &ListOptions) -> Result<ApiResponse, Error> {
    let url = format!("{}/user/followers", self.base_url);
    self.get_paged(url, opts.page_url.as_deref(), opts.query()).await
  }

  /// Retrieve rate-limit status for the authenticated user. This call does
  /// not count against the rate limit.
  pub async fn rate_limit_status(&self) -> Result<ApiResponse, Error> {
    let url = format!("{}/rate_limit", self.base_url);
    self.get(&url).await
  }
}

#[cfg(test)]
mod tests {
  use wiremock::matchers::{method, path};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use crate::client::GhClient;
  use crate::consts::{USER_BLOCKED_STATUS, USER_NOT_BLOCKED_STATUS};

  #[tokio::test]
  async fn blocked_check_reports_through_the_status_code() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    let client = GhClient::new("test_token")?.with_base_url(server.uri());

    Mock::given(method("GET"))
      .and(path("/user/blocks/blocked-account"))
      .respond_with(ResponseTemplate::new(204))
      .mount(&server)
      .await;
    Mock::given(method("GET"))
      .and(path("/user/blocks/friendly-account"))
      .respond_with(ResponseTemplate::new(404))
      .mount(&server)
      .await;

    let blocked = client.is_user_blocked("blocked-account").await?;
    assert_eq!(blocked.status.as_u16(), USER_BLOCKED_STATUS);

    let friendly = client.is_user_blocked("friendly-account").await?;
    assert_eq!(friendly.status.as_u16(), USER_NOT_BLOCKED_STATUS);
    Ok(())
  }

  #[tokio::test]
  async fn current_user_hits_the_user_resource() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    let client = GhClient::new("test_token")?.with_base_url(server.uri());

    Mock::given(method("GET"))
      .and(path("/user"))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"login": "octocat"})))
      .mount(&server)
      .await;

    let response = client.current_user().await?;
    assert_eq!(response.status.as_u16(), 200);
    assert!(response.body.contains("octocat"));
    Ok(())
  }
}

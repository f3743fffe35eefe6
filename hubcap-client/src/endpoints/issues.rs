//! # Issue Endpoints
//!
//! Bindings for issues: listing for the authenticated user or a repository,
//! the create/update lifecycle, and locking. Lock and unlock return only a
//! status code (204 on success) with no body.

use crate::client::GhClient;
use crate::error::{Error, ensure_arg};
use crate::options::IssueListOptions;
use crate::response::ApiResponse;

impl GhClient {
  /// List issues assigned to the authenticated user across repositories.
  pub async fn list_user_issues(&self, opts: &IssueListOptions) -> Result<ApiResponse, Error> {
    let url = format!("{}/issues", self.base_url);
    self.get_paged(url, opts.page_url.as_deref(), opts.query()).await
  }

  /// List issues for a repository.
  pub async fn list_repo_issues(&self, owner: &str, repo: &str, opts: &IssueListOptions) -> Result<ApiResponse, Error> {
    ensure_arg("owner", owner)?;
    ensure_arg("repo", repo)?;

    let url = format!("{}/repos/{}/{}/issues", self.base_url, owner, repo);
    self.get_paged(url, opts.page_url.as_deref(), opts.query()).await
  }

  /// Create an issue. `data` is the JSON request body; `title` is required
  /// by the API, e.g. `{"title":"Found a bug","labels":["bug"]}`.
  pub async fn create_issue(&self, owner: &str, repo: &str, data: &str) -> Result<ApiResponse, Error> {
    ensure_arg("owner", owner)?;
    ensure_arg("repo", repo)?;

    let url = format!("{}/repos/{}/{}/issues", self.base_url, owner, repo);
    self.post(&url, data).await
  }

  /// Retrieve an issue by number.
  pub async fn issue_by_number(&self, owner: &str, repo: &str, number: u64) -> Result<ApiResponse, Error> {
    ensure_arg("owner", owner)?;
    ensure_arg("repo", repo)?;

    let url = format!("{}/repos/{}/{}/issues/{}", self.base_url, owner, repo, number);
    self.get(&url).await
  }

  /// Update an issue by number.
  pub async fn update_issue(&self, owner: &str, repo: &str, number: u64, data: &str) -> Result<ApiResponse, Error> {
    ensure_arg("owner", owner)?;
    ensure_arg("repo", repo)?;

    let url = format!("{}/repos/{}/{}/issues/{}", self.base_url, owner, repo, number);
    self.patch(&url, data).await
  }

  /// Lock an issue. `data` is the JSON request body, e.g.
  /// `{"lock_reason":"off-topic"}`. A successful call returns 204.
  pub async fn lock_issue(&self, owner: &str, repo: &str, number: u64, data: &str) -> Result<ApiResponse, Error> {
    ensure_arg("owner", owner)?;
    ensure_arg("repo", repo)?;

    let url = format!("{}/repos/{}/{}/issues/{}/lock", self.base_url, owner, repo, number);
    self.put(&url, Some(data)).await
  }

  /// Unlock an issue. A successful call returns 204.
  pub async fn unlock_issue(&self, owner: &str, repo: &str, number: u64) -> Result<ApiResponse, Error> {
    ensure_arg("owner", owner)?;
    ensure_arg("repo", repo)?;

    let url = format!("{}/repos/{}/{}/issues/{}/lock", self.base_url, owner, repo, number);
    self.delete(&url).await
  }
}

#[cfg(test)]
mod tests {
  use wiremock::matchers::{body_string, method, path, query_param};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use crate::client::GhClient;
  use crate::options::{IssueListOptions, ItemState};

  #[tokio::test]
  async fn list_repo_issues_emits_filters() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    let client = GhClient::new("test_token")?.with_base_url(server.uri());

    Mock::given(method("GET"))
      .and(path("/repos/rancher/rke2/issues"))
      .and(query_param("state", "all"))
      .and(query_param("labels", "kind/bug"))
      .and(query_param("since", "2024-01-01T00:00:00Z"))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
      .mount(&server)
      .await;

    let opts = IssueListOptions {
      state: Some(ItemState::All),
      labels: Some("kind/bug".to_string()),
      since: Some("2024-01-01T00:00:00Z".to_string()),
      ..Default::default()
    };
    let response = client.list_repo_issues("rancher", "rke2", &opts).await?;

    assert_eq!(response.status.as_u16(), 200);
    Ok(())
  }

  #[tokio::test]
  async fn lock_issue_sends_the_reason_and_returns_204() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    let client = GhClient::new("test_token")?.with_base_url(server.uri());

    Mock::given(method("PUT"))
      .and(path("/repos/rancher/rke2/issues/12/lock"))
      .and(body_string("{\"lock_reason\":\"resolved\"}"))
      .respond_with(ResponseTemplate::new(204))
      .mount(&server)
      .await;

    let response = client
      .lock_issue("rancher", "rke2", 12, "{\"lock_reason\":\"resolved\"}")
      .await?;

    assert_eq!(response.status.as_u16(), 204);
    assert!(response.body.is_empty());
    Ok(())
  }

  #[tokio::test]
  async fn unlock_issue_hits_the_lock_resource_with_delete() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    let client = GhClient::new("test_token")?.with_base_url(server.uri());

    Mock::given(method("DELETE"))
      .and(path("/repos/rancher/rke2/issues/12/lock"))
      .respond_with(ResponseTemplate::new(204))
      .mount(&server)
      .await;

    let response = client.unlock_issue("rancher", "rke2", 12).await?;
    assert_eq!(response.status.as_u16(), 204);
    Ok(())
  }
}

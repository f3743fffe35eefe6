//! # Release Endpoints
//!
//! Bindings for the repository release resource: listing, lookups by tag or
//! id, the create/update/delete lifecycle, generated release notes, and
//! release assets.

use tracing::instrument;

use crate::client::GhClient;
use crate::error::{Error, ensure_arg};
use crate::options::ListOptions;
use crate::response::ApiResponse;

impl GhClient {
  /// List releases for a repository.
  #[instrument(skip(self, opts), level = "debug")]
  pub async fn list_releases(&self, owner: &str, repo: &str, opts: &ListOptions) -> Result<ApiResponse, Error> {
    ensure_arg("owner", owner)?;
    ensure_arg("repo", repo)?;

    let url = format!("{}/repos/{}/{}/releases", self.base_url, owner, repo);
    self.get_paged(url, opts.page_url.as_deref(), opts.query()).await
  }

  /// Retrieve the latest release for a repository.
  pub async fn latest_release(&self, owner: &str, repo: &str) -> Result<ApiResponse, Error> {
    ensure_arg("owner", owner)?;
    ensure_arg("repo", repo)?;

    let url = format!("{}/repos/{}/{}/releases/latest", self.base_url, owner, repo);
    self.get(&url).await
  }

  /// Retrieve a release by its tag.
  #[instrument(skip(self), level = "debug")]
  pub async fn release_by_tag(&self, owner: &str, repo: &str, tag: &str) -> Result<ApiResponse, Error> {
    ensure_arg("owner", owner)?;
    ensure_arg("repo", repo)?;
    ensure_arg("tag", tag)?;

    let url = format!("{}/repos/{}/{}/releases/tags/{}", self.base_url, owner, repo, tag);
    self.get(&url).await
  }

  /// Retrieve a release by its id.
  pub async fn release_by_id(&self, owner: &str, repo: &str, id: u64) -> Result<ApiResponse, Error> {
    ensure_arg("owner", owner)?;
    ensure_arg("repo", repo)?;

    let url = format!("{}/repos/{}/{}/releases/{}", self.base_url, owner, repo, id);
    self.get(&url).await
  }

  /// Create a release. `data` is the JSON request body, e.g.
  /// `{"tag_name":"v1.0.0","target_commitish":"main","name":"v1.0.0"}`.
  pub async fn create_release(&self, owner: &str, repo: &str, data: &str) -> Result<ApiResponse, Error> {
    ensure_arg("owner", owner)?;
    ensure_arg("repo", repo)?;

    let url = format!("{}/repos/{}/{}/releases", self.base_url, owner, repo);
    self.post(&url, data).await
  }

  /// Update a release.
  pub async fn update_release(&self, owner: &str, repo: &str, id: u64, data: &str) -> Result<ApiResponse, Error> {
    ensure_arg("owner", owner)?;
    ensure_arg("repo", repo)?;

    let url = format!("{}/repos/{}/{}/releases/{}", self.base_url, owner, repo, id);
    self.patch(&url, data).await
  }

  /// Delete a release.
  pub async fn delete_release(&self, owner: &str, repo: &str, id: u64) -> Result<ApiResponse, Error> {
    ensure_arg("owner", owner)?;
    ensure_arg("repo", repo)?;

    let url = format!("{}/repos/{}/{}/releases/{}", self.base_url, owner, repo, id);
    self.delete(&url).await
  }

  /// Generate release notes content for a release. `data` must at least
  /// carry `tag_name`.
  pub async fn generate_release_notes(&self, owner: &str, repo: &str, data: &str) -> Result<ApiResponse, Error> {
    ensure_arg("owner", owner)?;
    ensure_arg("repo", repo)?;

    let url = format!("{}/repos/{}/{}/releases/generate-notes", self.base_url, owner, repo);
    self.post(&url, data).await
  }

  /// List the assets attached to a release.
  pub async fn list_release_assets(
    &self,
    owner: &str,
    repo: &str,
    id: u64,
    opts: &ListOptions,
  ) -> Result<ApiResponse, Error> {
    ensure_arg("owner", owner)?;
    ensure_arg("repo", repo)?;

    let url = format!("{}/repos/{}/{}/releases/{}/assets", self.base_url, owner, repo, id);
    self.get_paged(url, opts.page_url.as_deref(), opts.query()).await
  }

  /// Retrieve a single release asset.
  pub async fn release_asset_by_id(&self, owner: &str, repo: &str, asset_id: u64) -> Result<ApiResponse, Error> {
    ensure_arg("owner", owner)?;
    ensure_arg("repo", repo)?;

    let url = format!("{}/repos/{}/{}/releases/assets/{}", self.base_url, owner, repo, asset_id);
    self.get(&url).await
  }
}

#[cfg(test)]
mod tests {
  use wiremock::matchers::{method, path, query_param};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use crate::client::GhClient;
  use crate::error::Error;
  use crate::options::ListOptions;

  fn test_client(server: &MockServer) -> GhClient {
    GhClient::new("test_token")
      .expect("client construction")
      .with_base_url(server.uri())
  }

  #[tokio::test]
  async fn list_releases_exposes_pagination_and_rate_limit() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    let client = test_client(&server);

    Mock::given(method("GET"))
      .and(path("/repos/rancher/rke2/releases"))
      .and(query_param("per_page", "50"))
      .respond_with(
        ResponseTemplate::new(200)
          .insert_header(
            "link",
            "<https://api.github.com/repositories/1/releases?page=2>; rel=\"next\", \
             <https://api.github.com/repositories/1/releases?page=9>; rel=\"last\"",
          )
          .insert_header("x-ratelimit-remaining", "4999")
          .set_body_json(serde_json::json!([{"tag_name": "v1.33.1+rke2r1"}])),
      )
      .mount(&server)
      .await;

    let opts = ListOptions {
      per_page: 50,
      page_url: None,
    };
    let response = client.list_releases("rancher", "rke2", &opts).await?;

    assert_eq!(response.status.as_u16(), 200);
    assert!(response.body.contains("v1.33.1+rke2r1"));
    assert_eq!(
      response.links.next.as_deref(),
      Some("https://api.github.com/repositories/1/releases?page=2")
    );
    assert_eq!(
      response.links.last.as_deref(),
      Some("https://api.github.com/repositories/1/releases?page=9")
    );
    assert_eq!(response.rate_limit.remaining, 4999);
    Ok(())
  }

  #[tokio::test]
  async fn list_releases_follows_an_explicit_page_url() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    let client = test_client(&server);

    Mock::given(method("GET"))
      .and(path("/repositories/1/releases"))
      .and(query_param("page", "2"))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
      .mount(&server)
      .await;

    let opts = ListOptions::from_page_url(format!("{}/repositories/1/releases?page=2", server.uri()));
    let response = client.list_releases("rancher", "rke2", &opts).await?;

    assert_eq!(response.status.as_u16(), 200);
    assert!(!response.links.has_next());
    Ok(())
  }

  #[tokio::test]
  async fn release_by_tag_passes_404_through() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    let client = test_client(&server);

    Mock::given(method("GET"))
      .and(path("/repos/rancher/rke2/releases/tags/v9.9.9"))
      .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({"message": "Not Found"})))
      .mount(&server)
      .await;

    let response = client.release_by_tag("rancher", "rke2", "v9.9.9").await?;
    assert_eq!(response.status.as_u16(), 404);
    assert!(response.body.contains("Not Found"));
    Ok(())
  }

  #[tokio::test]
  async fn empty_identifiers_never_reach_the_network() -> anyhow::Result<()> {
    // Nothing listens here; a request would fail with a transport error,
    // so a MissingArgument proves the call bailed first.
    let client = GhClient::new("test_token")?.with_base_url("http://127.0.0.1:9");

    let result = client.list_releases("", "rke2", &ListOptions::default()).await;
    assert!(matches!(result, Err(Error::MissingArgument("owner"))));

    let result = client.release_by_tag("rancher", "", "v1.0.0").await;
    assert!(matches!(result, Err(Error::MissingArgument("repo"))));

    let result = client.create_release("", "rke2", "{}").await;
    assert!(matches!(result, Err(Error::MissingArgument("owner"))));
    Ok(())
  }

  #[tokio::test]
  async fn delete_release_returns_the_empty_body() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    let client = test_client(&server);

    Mock::given(method("DELETE"))
      .and(path("/repos/rancher/rke2/releases/42"))
      .respond_with(ResponseTemplate::new(204))
      .mount(&server)
      .await;

    let response = client.delete_release("rancher", "rke2", 42).await?;
    assert_eq!(response.status.as_u16(), 204);
    assert!(response.body.is_empty());
    Ok(())
  }
}

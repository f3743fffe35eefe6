//! # Pull Request Endpoints
//!
//! Bindings for repository pull requests: listing with state and direction
//! filters and single lookup by number.

use tracing::instrument;

use crate::client::GhClient;
use crate::error::{Error, ensure_arg};
use crate::options::PullRequestListOptions;
use crate::response::ApiResponse;

impl GhClient {
  /// List pull requests for a repository.
  #[instrument(skip(self, opts), level = "debug")]
  pub async fn list_pull_requests(
    &self,
    owner: &str,
    repo: &str,
    opts: &PullRequestListOptions,
  ) -> Result<ApiResponse, Error> {
    ensure_arg("owner", owner)?;
    ensure_arg("repo", repo)?;

    let url = format!("{}/repos/{}/{}/pulls", self.base_url, owner, repo);
    self.get_paged(url, opts.page_url.as_deref(), opts.query()).await
  }

  /// Retrieve a single pull request by number. Only the `state` option is
  /// honored; direction and paging fields are ignored.
  pub async fn pull_request_by_number(
    &self,
    owner: &str,
    repo: &str,
    number: u64,
    opts: &PullRequestListOptions,
  ) -> Result<ApiResponse, Error> {
    ensure_arg("owner", owner)?;
    ensure_arg("repo", repo)?;

    let url = format!("{}/repos/{}/{}/pulls/{}", self.base_url, owner, repo, number);
    let query = opts.query_for_get();
    self.get_paged(url, None, query).await
  }
}

//! # Commit Endpoints
//!
//! Bindings for repository commit history: listing with history-window
//! filters, single-commit lookup, comparisons, and the pull requests that
//! introduced a commit.

use crate::client::GhClient;
use crate::error::{Error, ensure_arg};
use crate::options::{CommitListOptions, ListOptions};
use crate::response::ApiResponse;

impl GhClient {
  /// List commits for a repository.
  pub async fn list_commits(&self, owner: &str, repo: &str, opts: &CommitListOptions) -> Result<ApiResponse, Error> {
    ensure_arg("owner", owner)?;
    ensure_arg("repo", repo)?;

    let url = format!("{}/repos/{}/{}/commits", self.base_url, owner, repo);
    self.get_paged(url, opts.page_url.as_deref(), opts.query()).await
  }

  /// Retrieve a single commit.
  pub async fn commit_by_sha(&self, owner: &str, repo: &str, sha: &str) -> Result<ApiResponse, Error> {
    ensure_arg("owner", owner)?;
    ensure_arg("repo", repo)?;
    ensure_arg("sha", sha)?;

    let url = format!("{}/repos/{}/{}/commits/{}", self.base_url, owner, repo, sha);
    self.get(&url).await
  }

  /// Compare two commits as `base...head`.
  pub async fn compare_commits(&self, owner: &str, repo: &str, base: &str, head: &str) -> Result<ApiResponse, Error> {
    ensure_arg("owner", owner)?;
    ensure_arg("repo", repo)?;
    ensure_arg("base", base)?;
    ensure_arg("head", head)?;

    let url = format!("{}/repos/{}/{}/compare/{}...{}", self.base_url, owner, repo, base, head);
    self.get(&url).await
  }

  /// List the pull requests associated with a commit.
  pub async fn pulls_for_commit(
    &self,
    owner: &str,
    repo: &str,
    sha: &str,
    opts: &ListOptions,
  ) -> Result<ApiResponse, Error> {
    ensure_arg("owner", owner)?;
    ensure_arg("repo", repo)?;
    ensure_arg("sha", sha)?;

    let url = format!("{}/repos/{}/{}/commits/{}/pulls", self.base_url, owner, repo, sha);
    self.get_paged(url, opts.page_url.as_deref(), opts.query()).await
  }
}

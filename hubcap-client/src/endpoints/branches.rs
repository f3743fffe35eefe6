//! # Branch Endpoints
//!
//! Bindings for repository branches: listing, lookup, rename, syncing a
//! fork with its upstream, and merging.

use crate::client::GhClient;
use crate::error::{Error, ensure_arg};
use crate::options::ListOptions;
use crate::response::ApiResponse;

impl GhClient {
  /// List branches for a repository.
  pub async fn list_branches(&self, owner: &str, repo: &str, opts: &ListOptions) -> Result<ApiResponse, Error> {
    ensure_arg("owner", owner)?;
    ensure_arg("repo", repo)?;

    let url = format!("{}/repos/{}/{}/branches", self.base_url, owner, repo);
    self.get_paged(url, opts.page_url.as_deref(), opts.query()).await
  }

  /// Retrieve a single branch.
  pub async fn branch_by_name(&self, owner: &str, repo: &str, branch: &str) -> Result<ApiResponse, Error> {
    ensure_arg("owner", owner)?;
    ensure_arg("repo", repo)?;
    ensure_arg("branch", branch)?;

    let url = format!("{}/repos/{}/{}/branches/{}", self.base_url, owner, repo, branch);
    self.get(&url).await
  }

  /// Rename a branch. `data` is the JSON request body, e.g.
  /// `{"new_name":"my_renamed_branch"}`.
  pub async fn rename_branch(&self, owner: &str, repo: &str, branch: &str, data: &str) -> Result<ApiResponse, Error> {
    ensure_arg("owner", owner)?;
    ensure_arg("repo", repo)?;
    ensure_arg("branch", branch)?;

    let url = format!("{}/repos/{}/{}/branches/{}/rename", self.base_url, owner, repo, branch);
    self.post(&url, data).await
  }

  /// Sync a fork branch with its upstream. `data` is the JSON request body,
  /// e.g. `{"branch":"main"}`.
  pub async fn sync_fork_with_upstream(&self, owner: &str, repo: &str, data: &str) -> Result<ApiResponse, Error> {
    ensure_arg("owner", owner)?;
    ensure_arg("repo", repo)?;

    let url = format!("{}/repos/{}/{}/merge-upstream", self.base_url, owner, repo);
    self.post(&url, data).await
  }

  /// Merge one branch into another. `data` is the JSON request body, e.g.
  /// `{"base":"main","head":"cool_feature","commit_message":"Shipped!"}`.
  pub async fn merge_branch(&self, owner: &str, repo: &str, data: &str) -> Result<ApiResponse, Error> {
    ensure_arg("owner", owner)?;
    ensure_arg("repo", repo)?;

    let url = format!("{}/repos/{}/{}/merges", self.base_url, owner, repo);
    self.post(&url, data).await
  }
}

//! # Metrics Endpoints
//!
//! Bindings for repository community and traffic metrics. The traffic
//! endpoints cover the trailing 14 days; clones and page views accept an
//! optional per-day or per-week breakdown.

use crate::client::GhClient;
use crate::error::{Error, ensure_arg};
use crate::options::TrafficInterval;
use crate::response::ApiResponse;

impl GhClient {
  /// Retrieve all community profile metrics for a repository.
  pub async fn community_profile(&self, owner: &str, repo: &str) -> Result<ApiResponse, Error> {
    ensure_arg("owner", owner)?;
    ensure_arg("repo", repo)?;

    let url = format!("{}/repos/{}/{}/community/profile", self.base_url, owner, repo);
    self.get(&url).await
  }

  /// Retrieve the total clone count with an optional interval breakdown.
  pub async fn repository_clones(
    &self,
    owner: &str,
    repo: &str,
    interval: Option<TrafficInterval>,
  ) -> Result<ApiResponse, Error> {
    ensure_arg("owner", owner)?;
    ensure_arg("repo", repo)?;

    let url = format!("{}/repos/{}/{}/traffic/clones", self.base_url, owner, repo);
    self.get_traffic(url, interval).await
  }

  /// Retrieve the top referral paths over the trailing window.
  pub async fn top_referral_paths(&self, owner: &str, repo: &str) -> Result<ApiResponse, Error> {
    ensure_arg("owner", owner)?;
    ensure_arg("repo", repo)?;

    let url = format!("{}/repos/{}/{}/traffic/popular/paths", self.base_url, owner, repo);
    self.get(&url).await
  }

  /// Retrieve the top referrers over the trailing window.
  pub async fn top_referral_sources(&self, owner: &str, repo: &str) -> Result<ApiResponse, Error> {
    ensure_arg("owner", owner)?;
    ensure_arg("repo", repo)?;

    let url = format!("{}/repos/{}/{}/traffic/popular/referrers", self.base_url, owner, repo);
    self.get(&url).await
  }

  /// Retrieve the total page view count with an optional interval breakdown.
  pub async fn page_views(
    &self,
    owner: &str,
    repo: &str,
    interval: Option<TrafficInterval>,
  ) -> Result<ApiResponse, Error> {
    ensure_arg("owner", owner)?;
    ensure_arg("repo", repo)?;

    let url = format!("{}/repos/{}/{}/traffic/views", self.base_url, owner, repo);
    self.get_traffic(url, interval).await
  }

  async fn get_traffic(&self, url: String, interval: Option<TrafficInterval>) -> Result<ApiResponse, Error> {
    let query = match interval {
      Some(interval) => vec![("per", interval.as_str().to_string())],
      None => Vec::new(),
    };
    self.get_paged(url, None, query).await
  }
}

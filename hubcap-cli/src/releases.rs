//! Release fetching shared by the reporting tools.
//!
//! The client returns envelopes; these helpers decode them into the typed
//! views and walk pagination cursors. Any non-success status or decode
//! failure is fatal — the tools never retry and never keep partial pages.

use anyhow::{Context, Result, bail};
use hubcap_client::{ApiResponse, GhClient, ListOptions};
use tracing::debug;

use crate::models::Release;

/// Decode a single-release envelope.
pub fn decode_release(response: &ApiResponse) -> Result<Release> {
  require_success(response)?;
  serde_json::from_str(&response.body).context("failed to decode release")
}

/// Decode a release-list envelope.
pub fn decode_releases(response: &ApiResponse) -> Result<Vec<Release>> {
  require_success(response)?;
  serde_json::from_str(&response.body).context("failed to decode release list")
}

/// Fetch every page of releases for a repository, following each `next`
/// link until it is absent.
pub async fn fetch_all_releases(client: &GhClient, owner: &str, repo: &str, per_page: u32) -> Result<Vec<Release>> {
  let mut releases = Vec::new();
  let mut opts = ListOptions {
    per_page,
    page_url: None,
  };

  loop {
    let response = client.list_releases(owner, repo, &opts).await?;
    releases.extend(decode_releases(&response)?);
    debug!(count = releases.len(), "fetched release page");

    match response.links.next {
      Some(next) => opts = ListOptions::from_page_url(next),
      None => break,
    }
  }

  Ok(releases)
}

fn require_success(response: &ApiResponse) -> Result<()> {
  if !response.status.is_success() {
    bail!("GitHub API returned {}: {}", response.status, api_message(&response.body));
  }
  Ok(())
}

/// Pull the API's `message` field out of an error body, falling back to the
/// raw text when there is none.
fn api_message(body: &str) -> String {
  serde_json::from_str::<serde_json::Value>(body)
    .ok()
    .and_then(|value| value.get("message").and_then(|m| m.as_str()).map(str::to_string))
    .unwrap_or_else(|| body.to_string())
}

//! # Release Report
//!
//! Prints a summary (branch, prerelease flag, asset count) for each release
//! tag given on the command line, inferring the owning repository from the
//! tag's format. rke2 tags additionally report the RPM asset counts of the
//! matching rke2-packaging releases.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use hubcap_client::{GhClient, auth};
use hubcap_cli::models::Release;
use hubcap_cli::output::{print_error, print_success};
use hubcap_cli::progress::spinner;
use hubcap_cli::releases::decode_release;
use tracing_subscriber::EnvFilter;

/// Longest list of tags a single invocation will report on.
const MAX_TAGS: usize = 10;

/// Suffixes of the rke2-packaging releases that carry the RPM assets for a
/// given rke2 tag.
const RPM_CHANNELS: [&str; 3] = [".testing.0", ".latest.0", ".stable.0"];

#[derive(Parser)]
#[command(name = "release-report")]
#[command(about = "Summarize GitHub releases for a list of tags")]
struct Cli {
  /// Comma-separated release tags, e.g. v1.33.1+rke2r1,v1.32.5+rke2r1
  tags: String,
}

/// Map a tag to the repository it belongs to.
fn repo_from_tag(tag: &str) -> Option<&'static str> {
  if tag.contains("rke2r") {
    return Some("rke2");
  }
  if tag.contains("k3s") {
    return Some("k3s");
  }
  None
}

/// Map a repository to the organization that owns it.
fn org_from_repo(repo: &str) -> Option<&'static str> {
  match repo {
    "rke2" | "ecm-distro-tools" => Some("rancher"),
    "k3s" => Some("k3s-io"),
    _ => None,
  }
}

async fn fetch_release(client: &GhClient, org: &str, repo: &str, tag: &str) -> Result<Release> {
  let response = client.release_by_tag(org, repo, tag).await?;
  decode_release(&response).with_context(|| format!("release {tag} in {org}/{repo}"))
}

/// Build the report block for one tag.
async fn tag_report(client: GhClient, tag: String) -> Result<String> {
  let repo = repo_from_tag(&tag).ok_or_else(|| anyhow!("cannot determine repository for tag {tag}"))?;
  let org = org_from_repo(repo).ok_or_else(|| anyhow!("cannot determine organization for repository {repo}"))?;

  let release = fetch_release(&client, org, repo, &tag).await?;

  let mut report = String::new();
  report.push_str(&format!("Tag:             {tag}\n"));
  report.push_str(&format!("Branch:          {}\n", release.target_commitish));
  report.push_str(&format!("Pre-Release:     {}\n", release.prerelease));
  report.push_str(&format!("Assets:          {}\n", release.assets.len()));

  if repo == "rke2" {
    for channel in RPM_CHANNELS {
      let full_tag = format!("{tag}{channel}");
      let rpm = fetch_release(&client, org, "rke2-packaging", &full_tag).await?;
      report.push_str(&format!("RPMs {channel:>10}: {}\n", rpm.assets.len()));
    }
  }

  Ok(report)
}

#[tokio::main]
async fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .init();

  let cli = Cli::parse();

  let tags: Vec<String> = cli
    .tags
    .split(',')
    .map(str::trim)
    .filter(|tag| !tag.is_empty())
    .map(String::from)
    .collect();
  if tags.is_empty() {
    bail!("at least one tag is required");
  }
  if tags.len() > MAX_TAGS {
    bail!("too many tags: {} (max {MAX_TAGS})", tags.len());
  }

  let client = auth::client_from_env()?;

  let progress = spinner("fetching release information");

  // Launch every tag fetch before joining any so the requests overlap.
  let handles: Vec<_> = tags
    .iter()
    .map(|tag| tokio::spawn(tag_report(client.clone(), tag.clone())))
    .collect();

  let mut reports = Vec::with_capacity(handles.len());
  let mut errors = Vec::new();
  for handle in handles {
    match handle.await? {
      Ok(report) => reports.push(report),
      Err(err) => errors.push(err),
    }
  }

  progress.finish_and_clear();

  if !errors.is_empty() {
    for err in errors {
      print_error(&format!("{err:#}"));
    }
    std::process::exit(1);
  }

  for report in reports {
    println!("{report}");
  }
  print_success("report complete");

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn repo_is_inferred_from_the_tag_format() {
    assert_eq!(repo_from_tag("v1.33.1+rke2r1"), Some("rke2"));
    assert_eq!(repo_from_tag("v1.33.1+k3s1"), Some("k3s"));
    assert_eq!(repo_from_tag("v1.33.1"), None);
  }

  #[test]
  fn org_is_inferred_from_the_repo() {
    assert_eq!(org_from_repo("rke2"), Some("rancher"));
    assert_eq!(org_from_repo("k3s"), Some("k3s-io"));
    assert_eq!(org_from_repo("unrelated"), None);
  }
}

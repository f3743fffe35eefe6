//! # End-of-Year Report
//!
//! Walks every release of a repository, keeps those created after the start
//! of the reporting year, and prints GA/RC counts plus per-captain totals.

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::Parser;
use hubcap_client::auth;
use hubcap_cli::progress::spinner;
use hubcap_cli::releases::fetch_all_releases;
use hubcap_cli::report::{CAPTAINS, tally_after};
use tabled::settings::Style;
use tabled::{Table, Tabled};
use tracing_subscriber::EnvFilter;

/// Start of the reporting window.
const CUTOFF: &str = "2024-01-01T00:00:00Z";

/// Page size used while walking the release list.
const PER_PAGE: u32 = 50;

#[derive(Parser)]
#[command(name = "eoy-report")]
#[command(about = "End-of-year release statistics for a repository")]
struct Cli {
  /// GitHub organization, e.g. rancher
  org: String,

  /// Repository name, e.g. rke2
  repo: String,
}

#[derive(Tabled)]
struct ReleaseRow {
  #[tabled(rename = "Releases")]
  kind: &'static str,
  #[tabled(rename = "No.")]
  count: u32,
}

#[derive(Tabled)]
struct CaptainRow {
  #[tabled(rename = "Captain")]
  name: &'static str,
  #[tabled(rename = "No.")]
  count: u32,
}

#[tokio::main]
async fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .init();

  let cli = Cli::parse();
  let cutoff: DateTime<Utc> = CUTOFF.parse()?;

  let client = auth::client_from_env()?;

  let progress = spinner("fetching releases");
  let releases = fetch_all_releases(&client, &cli.org, &cli.repo, PER_PAGE).await;
  progress.finish_and_clear();

  let tally = tally_after(&releases?, cutoff)?;

  let release_rows = vec![
    ReleaseRow {
      kind: "GA",
      count: tally.ga,
    },
    ReleaseRow {
      kind: "RCs",
      count: tally.rc,
    },
    ReleaseRow {
      kind: "Total",
      count: tally.total(),
    },
  ];
  println!("{}", Table::new(release_rows).with(Style::modern()));

  let captain_rows: Vec<CaptainRow> = CAPTAINS
    .iter()
    .zip(tally.captains)
    .map(|((_, name), count)| CaptainRow { name, count })
    .collect();
  println!();
  println!("{}", Table::new(captain_rows).with(Style::modern()));

  Ok(())
}

//! End-of-year release aggregation.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

use crate::models::Release;

/// Release captains tallied by the end-of-year report: login and the
/// display name used in the printed table.
pub const CAPTAINS: [(&str, &str); 5] = [
  ("brooksn", "Brooks"),
  ("rafaelbreno", "Rafael"),
  ("briandowns", "Brian"),
  ("tashima42", "Pedro"),
  ("nicholasSUSE", "Nicholas"),
];

/// GA and release-candidate counts plus per-captain totals, indexed in
/// [`CAPTAINS`] order.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ReleaseTally {
  pub ga: u32,
  pub rc: u32,
  pub captains: [u32; 5],
}

impl ReleaseTally {
  pub const fn total(&self) -> u32 {
    self.ga + self.rc
  }
}

/// Tally releases created strictly after the cutoff.
///
/// A tag containing `-rc` counts as a release candidate, anything else as
/// GA. Releases by authors outside [`CAPTAINS`] still count toward the
/// GA/RC totals.
pub fn tally_after(releases: &[Release], cutoff: DateTime<Utc>) -> Result<ReleaseTally> {
  let mut tally = ReleaseTally::default();

  for release in releases {
    let created = DateTime::parse_from_rfc3339(&release.created_at)
      .with_context(|| format!("failed to parse created_at for {}", release.tag_name))?;
    if created.with_timezone(&Utc) <= cutoff {
      continue;
    }

    if release.tag_name.contains("-rc") {
      tally.rc += 1;
    } else {
      tally.ga += 1;
    }

    if let Some(author) = &release.author
      && let Some(pos) = CAPTAINS.iter().position(|(login, _)| *login == author.login)
    {
      tally.captains[pos] += 1;
    }
  }

  Ok(tally)
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  fn release(tag: &str, created_at: &str, author: Option<&str>) -> Release {
    let mut value = json!({"tag_name": tag, "created_at": created_at});
    if let Some(login) = author {
      value["author"] = json!({"login": login});
    }
    serde_json::from_value(value).unwrap()
  }

  fn cutoff() -> DateTime<Utc> {
    "2024-01-01T00:00:00Z".parse().unwrap()
  }

  #[test]
  fn releases_before_the_cutoff_are_excluded() {
    let releases = vec![
      release("v1.0.0-rc1", "2023-12-30T00:00:00Z", None),
      release("v1.1.0", "2024-02-01T00:00:00Z", None),
    ];

    let tally = tally_after(&releases, cutoff()).unwrap();

    assert_eq!(tally.ga, 1);
    assert_eq!(tally.rc, 0);
    assert_eq!(tally.total(), 1);
  }

  #[test]
  fn rc_tags_are_classified_by_substring() {
    let releases = vec![
      release("v1.2.0-rc2+rke2r1", "2024-03-01T00:00:00Z", None),
      release("v1.2.0+rke2r1", "2024-03-08T00:00:00Z", None),
      release("v1.3.0-rc1+rke2r1", "2024-06-01T00:00:00Z", None),
    ];

    let tally = tally_after(&releases, cutoff()).unwrap();

    assert_eq!(tally.ga, 1);
    assert_eq!(tally.rc, 2);
  }

  #[test]
  fn captain_counts_follow_the_author_login() {
    let releases = vec![
      release("v1.1.0", "2024-02-01T00:00:00Z", Some("briandowns")),
      release("v1.2.0", "2024-03-01T00:00:00Z", Some("briandowns")),
      release("v1.3.0", "2024-04-01T00:00:00Z", Some("tashima42")),
      release("v1.4.0", "2024-05-01T00:00:00Z", Some("somebody-else")),
    ];

    let tally = tally_after(&releases, cutoff()).unwrap();

    assert_eq!(tally.ga, 4);
    let brian = CAPTAINS.iter().position(|(login, _)| *login == "briandowns").unwrap();
    let pedro = CAPTAINS.iter().position(|(login, _)| *login == "tashima42").unwrap();
    assert_eq!(tally.captains[brian], 2);
    assert_eq!(tally.captains[pedro], 1);
  }

  #[test]
  fn unparseable_created_at_is_fatal() {
    let releases = vec![release("v1.1.0", "not-a-date", None)];
    assert!(tally_after(&releases, cutoff()).is_err());
  }
}

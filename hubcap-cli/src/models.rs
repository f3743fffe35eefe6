//! Typed views over the release JSON consumed by the reporting tools.
//!
//! The client library hands back opaque JSON text; each tool decodes only
//! the fields it actually reads. A missing required field is a decode error
//! and fatal to the tool.

use serde::Deserialize;

/// One release, reduced to the fields the reports consume.
#[derive(Debug, Clone, Deserialize)]
pub struct Release {
  pub tag_name: String,
  pub created_at: String,
  #[serde(default)]
  pub target_commitish: String,
  #[serde(default)]
  pub prerelease: bool,
  #[serde(default)]
  pub assets: Vec<ReleaseAsset>,
  #[serde(default)]
  pub author: Option<ReleaseAuthor>,
}

/// A single release asset.
#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseAsset {
  pub name: String,
}

/// The account that published a release.
#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseAuthor {
  pub login: String,
}

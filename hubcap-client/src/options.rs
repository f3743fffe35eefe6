//! # Request Options
//!
//! Option structs for the list endpoints. Each enumerates the query
//! parameters its endpoint recognizes; unset fields are simply not emitted.
//! Two rules apply uniformly:
//!
//! - `per_page` is only sent when it exceeds the API default of 30.
//! - a set `page_url` is used verbatim in place of a constructed URL; this
//!   is how callers walk pagination cursors (see [`crate::PageLinks`]).

use crate::consts::DEFAULT_PER_PAGE;

/// State filter when listing pull requests or issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemState {
  Open,
  Closed,
  Merged,
  All,
}

impl ItemState {
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Open => "open",
      Self::Closed => "closed",
      Self::Merged => "merged",
      Self::All => "all",
    }
  }
}

/// Sort direction when listing items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
  Asc,
  Desc,
}

impl SortDirection {
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Asc => "asc",
      Self::Desc => "desc",
    }
  }
}

/// Relationship filter when listing issues for the authenticated user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueFilter {
  Assigned,
  Created,
  Mentioned,
  Subscribed,
  Repos,
  All,
}

impl IssueFilter {
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Assigned => "assigned",
      Self::Created => "created",
      Self::Mentioned => "mentioned",
      Self::Subscribed => "subscribed",
      Self::Repos => "repos",
      Self::All => "all",
    }
  }
}

/// Sort key when listing issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueSort {
  Created,
  Updated,
  Comments,
}

impl IssueSort {
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Created => "created",
      Self::Updated => "updated",
      Self::Comments => "comments",
    }
  }
}

/// Breakdown interval for the traffic metrics endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrafficInterval {
  Day,
  Week,
}

impl TrafficInterval {
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Day => "day",
      Self::Week => "week",
    }
  }
}

/// Pagination settings for plain list endpoints.
#[derive(Debug, Default, Clone)]
pub struct ListOptions {
  pub per_page: u32,
  pub page_url: Option<String>,
}

impl ListOptions {
  /// Continue a pagination walk from a link returned by a previous call.
  pub fn from_page_url(url: impl Into<String>) -> Self {
    Self {
      per_page: 0,
      page_url: Some(url.into()),
    }
  }

  pub(crate) fn query(&self) -> Vec<(&'static str, String)> {
    let mut query = Vec::new();
    push_per_page(&mut query, self.per_page);
    query
  }
}

/// Additional options when listing pull requests.
#[derive(Debug, Default, Clone)]
pub struct PullRequestListOptions {
  pub state: Option<ItemState>,
  pub direction: Option<SortDirection>,
  pub per_page: u32,
  pub page_url: Option<String>,
}

impl PullRequestListOptions {
  pub(crate) fn query(&self) -> Vec<(&'static str, String)> {
    let mut query = Vec::new();
    if let Some(state) = self.state {
      query.push(("state", state.as_str().to_string()));
    }
    if let Some(direction) = self.direction {
      query.push(("direction", direction.as_str().to_string()));
    }
    push_per_page(&mut query, self.per_page);
    query
  }

  /// The subset honored when fetching a single pull request.
  pub(crate) fn query_for_get(&self) -> Vec<(&'static str, String)> {
    match self.state {
      Some(state) => vec![("state", state.as_str().to_string())],
      None => Vec::new(),
    }
  }
}

/// Additional options when listing issues.
///
/// `since` is expected in `YYYY-MM-DDTHH:MM:SSZ` format; the value is passed
/// through without validation.
#[derive(Debug, Default, Clone)]
pub struct IssueListOptions {
  pub filter: Option<IssueFilter>,
  pub state: Option<ItemState>,
  pub labels: Option<String>,
  pub assignee: Option<String>,
  pub creator: Option<String>,
  pub mention: Option<String>,
  pub since: Option<String>,
  pub sort: Option<IssueSort>,
  pub direction: Option<SortDirection>,
  pub per_page: u32,
  pub page_url: Option<String>,
}

impl IssueListOptions {
  pub(crate) fn query(&self) -> Vec<(&'static str, String)> {
    let mut query = Vec::new();
    if let Some(filter) = self.filter {
      query.push(("filter", filter.as_str().to_string()));
    }
    if let Some(state) = self.state {
      query.push(("state", state.as_str().to_string()));
    }
    if let Some(labels) = &self.labels {
      query.push(("labels", labels.clone()));
    }
    if let Some(assignee) = &self.assignee {
      query.push(("assignee", assignee.clone()));
    }
    if let Some(creator) = &self.creator {
      query.push(("creator", creator.clone()));
    }
    if let Some(mention) = &self.mention {
      query.push(("mention", mention.clone()));
    }
    if let Some(since) = &self.since {
      query.push(("since", since.clone()));
    }
    if let Some(sort) = self.sort {
      query.push(("sort", sort.as_str().to_string()));
    }
    if let Some(direction) = self.direction {
      query.push(("direction", direction.as_str().to_string()));
    }
    push_per_page(&mut query, self.per_page);
    query
  }
}

/// Additional options when listing commits.
///
/// `since` and `until` are expected in `YYYY-MM-DDTHH:MM:SSZ` format; values
/// are passed through without validation.
#[derive(Debug, Default, Clone)]
pub struct CommitListOptions {
  pub sha: Option<String>,
  pub path: Option<String>,
  pub author: Option<String>,
  pub committer: Option<String>,
  pub since: Option<String>,
  pub until: Option<String>,
  pub per_page: u32,
  pub page_url: Option<String>,
}

impl CommitListOptions {
  pub(crate) fn query(&self) -> Vec<(&'static str, String)> {
    let mut query = Vec::new();
    if let Some(sha) = &self.sha {
      query.push(("sha", sha.clone()));
    }
    if let Some(path) = &self.path {
      query.push(("path", path.clone()));
    }
    if let Some(author) = &self.author {
      query.push(("author", author.clone()));
    }
    if let Some(committer) = &self.committer {
      query.push(("committer", committer.clone()));
    }
    if let Some(since) = &self.since {
      query.push(("since", since.clone()));
    }
    if let Some(until) = &self.until {
      query.push(("until", until.clone()));
    }
    push_per_page(&mut query, self.per_page);
    query
  }
}

fn push_per_page(query: &mut Vec<(&'static str, String)>, per_page: u32) {
  if per_page > DEFAULT_PER_PAGE {
    query.push(("per_page", per_page.to_string()));
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn per_page_at_or_below_the_default_is_not_emitted() {
    let opts = ListOptions {
      per_page: 30,
      page_url: None,
    };
    assert!(opts.query().is_empty());

    let opts = ListOptions {
      per_page: 50,
      page_url: None,
    };
    assert_eq!(opts.query(), vec![("per_page", "50".to_string())]);
  }

  #[test]
  fn from_page_url_carries_only_the_cursor() {
    let opts = ListOptions::from_page_url("https://e.com/page/2");
    assert_eq!(opts.page_url.as_deref(), Some("https://e.com/page/2"));
    assert!(opts.query().is_empty());
  }

  #[test]
  fn pull_request_options_emit_state_and_direction() {
    let opts = PullRequestListOptions {
      state: Some(ItemState::Closed),
      direction: Some(SortDirection::Asc),
      per_page: 100,
      page_url: None,
    };
    assert_eq!(
      opts.query(),
      vec![
        ("state", "closed".to_string()),
        ("direction", "asc".to_string()),
        ("per_page", "100".to_string()),
      ]
    );
  }

  #[test]
  fn pull_request_get_honors_only_the_state() {
    let opts = PullRequestListOptions {
      state: Some(ItemState::Merged),
      direction: Some(SortDirection::Asc),
      per_page: 100,
      page_url: None,
    };
    assert_eq!(opts.query_for_get(), vec![("state", "merged".to_string())]);
  }

  #[test]
  fn issue_options_emit_every_set_filter() {
    let opts = IssueListOptions {
      filter: Some(IssueFilter::All),
      state: Some(ItemState::All),
      labels: Some("bug,triage".to_string()),
      since: Some("2024-01-01T00:00:00Z".to_string()),
      per_page: 50,
      ..Default::default()
    };
    assert_eq!(
      opts.query(),
      vec![
        ("filter", "all".to_string()),
        ("state", "all".to_string()),
        ("labels", "bug,triage".to_string()),
        ("since", "2024-01-01T00:00:00Z".to_string()),
        ("per_page", "50".to_string()),
      ]
    );
  }

  #[test]
  fn commit_options_emit_history_window_filters() {
    let opts = CommitListOptions {
      sha: Some("main".to_string()),
      author: Some("octocat".to_string()),
      since: Some("2024-01-01T00:00:00Z".to_string()),
      until: Some("2024-06-30T00:00:00Z".to_string()),
      ..Default::default()
    };
    assert_eq!(
      opts.query(),
      vec![
        ("sha", "main".to_string()),
        ("author", "octocat".to_string()),
        ("since", "2024-01-01T00:00:00Z".to_string()),
        ("until", "2024-06-30T00:00:00Z".to_string()),
      ]
    );
  }
}

//! # Response Envelope
//!
//! Types produced for every API call: the raw response body plus the
//! protocol metadata GitHub reports through headers — rate-limit counters
//! and RFC-5988 `Link` pagination relations. Parsing never fails; malformed
//! header values degrade to defaults so a bad header cannot sink a call.

use reqwest::StatusCode;
use reqwest::header::{HeaderMap, LINK};

/// Rate-limit counters reported by the API on each response.
///
/// Fields stay at zero/empty when the corresponding header is absent. A
/// counter value with trailing non-digit characters parses as zero rather
/// than failing the call.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RateLimit {
  pub limit: u64,
  pub remaining: u64,
  pub reset: u64,
  pub used: u64,
  pub resource: String,
}

impl RateLimit {
  /// Build a snapshot from a full header map.
  pub fn from_headers(headers: &HeaderMap) -> Self {
    let mut rate = Self::default();
    for (name, value) in headers {
      if let Ok(value) = value.to_str() {
        rate.record(name.as_str(), value);
      }
    }
    rate
  }

  /// Record a single response header into the snapshot.
  ///
  /// Header names are matched case-insensitively and unrelated headers are
  /// ignored, so a caller holding headers one line at a time can feed every
  /// line through.
  pub fn record(&mut self, name: &str, value: &str) {
    let value = value.trim();
    match name.to_ascii_lowercase().as_str() {
      "x-ratelimit-limit" => self.limit = parse_counter(value),
      "x-ratelimit-remaining" => self.remaining = parse_counter(value),
      "x-ratelimit-reset" => self.reset = parse_counter(value),
      "x-ratelimit-used" => self.used = parse_counter(value),
      "x-ratelimit-resource" => self.resource = value.to_string(),
      _ => {}
    }
  }
}

/// Strict decimal parse: any non-digit input, including trailing garbage
/// after a valid prefix, yields zero.
fn parse_counter(value: &str) -> u64 {
  value.parse().unwrap_or(0)
}

/// Pagination URLs extracted from the RFC-5988 `Link` response header.
///
/// A relation that does not appear in the header is `None`; callers treat
/// that as "no such page", never as an error.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PageLinks {
  pub first: Option<String>,
  pub prev: Option<String>,
  pub next: Option<String>,
  pub last: Option<String>,
}

impl PageLinks {
  /// Extract the links from a full header map.
  pub fn from_headers(headers: &HeaderMap) -> Self {
    headers
      .get(LINK)
      .and_then(|value| value.to_str().ok())
      .map(Self::parse)
      .unwrap_or_default()
  }

  /// Parse one `Link` header value.
  ///
  /// The value is a comma-separated list of `<url>; rel="name"` entries; a
  /// value without commas is a single entry. An entry missing any of its
  /// delimiters is skipped. Relation names are matched by substring with a
  /// fixed priority — first, prev, next, last — and a later entry for the
  /// same relation overwrites an earlier one.
  pub fn parse(header: &str) -> Self {
    let mut links = Self::default();
    for entry in header.split(',') {
      let Some((url, rel)) = split_link_entry(entry) else {
        continue;
      };
      if rel.contains("first") {
        links.first = Some(url.to_string());
      } else if rel.contains("prev") {
        links.prev = Some(url.to_string());
      } else if rel.contains("next") {
        links.next = Some(url.to_string());
      } else if rel.contains("last") {
        links.last = Some(url.to_string());
      }
    }
    links
  }

  /// Whether another page follows this one.
  pub const fn has_next(&self) -> bool {
    self.next.is_some()
  }
}

/// Split one link entry into its URL (between `<` and `>`) and relation
/// name (between `rel="` and the next `"`).
fn split_link_entry(entry: &str) -> Option<(&str, &str)> {
  let start = entry.find('<')?;
  let end = start + 1 + entry[start + 1..].find('>')?;
  let url = &entry[start + 1..end];

  let rest = &entry[end + 1..];
  let rel_start = rest.find("rel=\"")? + 5;
  let rel_end = rel_start + rest[rel_start..].find('"')?;

  Some((url, &rest[rel_start..rel_end]))
}

/// The result of one API call.
///
/// Exactly one envelope is produced per call. The body is the full received
/// text (possibly empty, e.g. for 204 responses) and `status` is reported
/// without interpretation — a 4xx or 5xx response is still a successful
/// transport outcome.
#[derive(Debug, Clone)]
pub struct ApiResponse {
  pub status: StatusCode,
  pub body: String,
  pub rate_limit: RateLimit,
  pub links: PageLinks,
}

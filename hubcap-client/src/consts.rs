//! Constants for the hubcap client

/// Base URL for the official SaaS GitHub API
pub const API_BASE_URL: &str = "https://api.github.com";

/// User-Agent header value for the GitHub API client
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Accept header value for the GitHub API
pub const ACCEPT: &str = "application/vnd.github+json";

/// Name of the header selecting the REST API version
pub const API_VERSION_HEADER: &str = "X-GitHub-Api-Version";

/// REST API version requested on every call
pub const API_VERSION: &str = "2022-11-28";

/// Page size the API applies when no `per_page` is sent; smaller requested
/// values are not emitted
pub const DEFAULT_PER_PAGE: u32 = 30;

/// Largest page size the API accepts
pub const MAX_PER_PAGE: u32 = 100;

/// Status returned by the blocked-user check when the user is blocked
pub const USER_BLOCKED_STATUS: u16 = 204;

/// Status returned by the blocked-user check when the user is not blocked
pub const USER_NOT_BLOCKED_STATUS: u16 = 404;

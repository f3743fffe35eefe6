//! # GitHub API Client
//!
//! Thin client for the GitHub REST API. Every public method performs exactly
//! one HTTP request and resolves to an [`ApiResponse`] envelope carrying the
//! raw body text, the HTTP status, rate-limit counters, and RFC-5988
//! pagination links.
//!
//! The library deliberately models no resources: bodies are opaque JSON text
//! and HTTP statuses are surfaced without interpretation, so a 404 is an
//! `Ok` envelope and only transport failures or empty required identifiers
//! become errors. Callers decode the bodies they care about and branch on
//! `status` themselves.

pub mod auth;
pub mod client;
pub mod consts;
pub mod endpoints;
pub mod error;
pub mod options;
pub mod response;

// Re-export the client
pub use client::GhClient;
// Re-export the error type
pub use error::Error;
// Re-export request options
pub use options::{
  CommitListOptions, IssueFilter, IssueListOptions, IssueSort, ItemState, ListOptions, PullRequestListOptions,
  SortDirection, TrafficInterval,
};
// Re-export the response envelope types
pub use response::{ApiResponse, PageLinks, RateLimit};

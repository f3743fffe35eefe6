//! # Endpoint Bindings
//!
//! One module per REST resource; every binding builds exactly one request
//! and resolves to the uniform response envelope. Mutating operations take
//! a pre-serialized JSON body which is passed through unvalidated.

pub mod billing;
pub mod branches;
pub mod commits;
pub mod conduct;
pub mod issues;
pub mod metrics;
pub mod pulls;
pub mod releases;
pub mod users;

// Tests have been implemented for the following endpoint groups:
// - releases: URL formatting, pagination metadata, argument validation
// - commits: history window query parameters
// - pulls: state/direction query emission
// - issues: repo listing filters and the 204 lock contract
// - users: the 204/404 blocked-check convention
//
// TODO: Add coverage for the metrics and billing bindings.

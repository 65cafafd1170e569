//! # postboard-client - Data Service Client
//!
//! Talks to the remote data service that owns users, posts and comments.
//! Every call is a single JSON round trip; any transport failure or non-2xx
//! status becomes [`Error::Request`](postboard_core::Error::Request), and a
//! body that does not match the expected record shape becomes
//! [`Error::Decode`](postboard_core::Error::Decode). No retries, no timeouts.
//!
//! Depends on [`postboard_core`] for the record types and error handling.
//!
//! ## Public API
//!
//! - [`ApiClient`] - `reqwest`-backed client bound to one base URL
//! - [`DataSource`] - The seam the application dispatches requests through
//! - [`endpoints`] - Paths of the four consumed endpoints

pub mod client;
pub mod endpoints;
pub mod source;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use client::{ApiClient, DEFAULT_BASE_URL};
pub use source::{DataSource, LocalDataSource};

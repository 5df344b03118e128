//! HTTP networking module
//!
//! Provides the outbound HTTP client used for all third-party API calls.

mod client;

pub use client::{HttpClient, RawResponse, UpstreamResponse};

//! DadJokes-MCP-RS: a demo tool server for browser widgets, written in Rust
//!
//! Wraps two third-party HTTP APIs (a dad-joke source and an exercise-search
//! source) as callable tools, served over a JSON-RPC endpoint alongside a
//! small REST surface and a local image proxy.

pub mod config;
pub mod error;
pub mod network;
pub mod protocol;
pub mod query;
pub mod results;
pub mod tools;
pub mod web;

pub use config::Settings;
pub use error::{Error, Result};
pub use tools::{Tool, ToolRegistry};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default number of search results requested from the exercise API
pub const DEFAULT_RESULT_LIMIT: u64 = 10;

/// Default timeout for upstream requests in seconds
pub const DEFAULT_TIMEOUT: u64 = 10;

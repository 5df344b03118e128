//! Error types for tool invocations and upstream calls.

use thiserror::Error;

/// How much of an upstream error body is kept on the error itself.
const UPSTREAM_BODY_LIMIT: usize = 100;

/// Main error type for the server.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration errors (missing API key, unparseable settings)
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Non-2xx response from a third-party API
    #[error("upstream error ({status}): {body}")]
    Upstream { status: u16, body: String },

    /// Network-level failure, including request timeouts
    #[error("transport error: {0}")]
    Transport(String),

    /// Response decoding failure on a typed payload
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Malformed tool arguments
    #[error("invalid tool arguments: {0}")]
    InvalidParams(String),

    /// Tool name not present in the registry
    #[error("unknown tool: {0}")]
    UnknownTool(String),
}

impl Error {
    /// Build an upstream error, keeping at most the first
    /// `UPSTREAM_BODY_LIMIT` characters of the response body.
    pub fn upstream(status: u16, body: &str) -> Self {
        Self::Upstream {
            status,
            body: body.chars().take(UPSTREAM_BODY_LIMIT).collect(),
        }
    }

    /// JSON-RPC error code for this error.
    pub fn rpc_code(&self) -> i64 {
        match self {
            Self::InvalidParams(_) => -32602,
            Self::UnknownTool(_) => -32601,
            _ => -32000,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

/// Result type alias for server operations.
pub type Result<T> = std::result::Result<T, Error>;

//! Web server module
//!
//! Provides the JSON-RPC tool endpoint, the REST mirror of the exercise
//! search, and the local image proxy.

mod handlers;
mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;

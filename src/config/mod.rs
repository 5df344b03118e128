//! Configuration module
//!
//! Handles loading settings from YAML files and environment variables.
//! Settings are built once at startup and threaded explicitly into each
//! component; nothing reads the process environment at call time.

mod settings;

pub use settings::*;

//! Application state shared across handlers

use crate::config::Settings;
use crate::network::HttpClient;
use crate::tools::ToolRegistry;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Global settings
    pub settings: Arc<Settings>,
    /// Tool registry
    pub registry: Arc<ToolRegistry>,
    /// Outbound HTTP client
    pub client: HttpClient,
}

impl AppState {
    /// Create new application state
    pub fn new(settings: Settings, client: HttpClient) -> Self {
        let settings = Arc::new(settings);
        let registry = Arc::new(ToolRegistry::load(&settings, &client));

        Self {
            settings,
            registry,
            client,
        }
    }

    /// Get instance name
    pub fn instance_name(&self) -> &str {
        &self.settings.general.instance_name
    }
}

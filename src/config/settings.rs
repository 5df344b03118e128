//! Settings structures for the tool server

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Environment variables recognized for the exercise API key, in priority
/// order.
pub const API_KEY_VARS: [&str; 2] = ["RAPIDAPI_KEY", "MUSCLEWIKI_API_KEY"];

/// Main settings structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub server: ServerSettings,
    pub upstream: UpstreamSettings,
    pub outgoing: OutgoingSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            general: GeneralSettings::default(),
            server: ServerSettings::default(),
            upstream: UpstreamSettings::default(),
            outgoing: OutgoingSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .map_err(|e| Error::Configuration(format!("cannot read settings file: {}", e)))?;
        let settings: Settings = serde_yaml::from_str(&content)
            .map_err(|e| Error::Configuration(format!("invalid settings file: {}", e)))?;
        Ok(settings)
    }

    /// Merge with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(val) = std::env::var("MCP_DEBUG") {
            self.general.debug = val.parse().unwrap_or(false);
        }
        if let Ok(val) = std::env::var("MCP_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("MCP_BIND_ADDRESS") {
            self.server.bind_address = val;
        }
        if let Ok(val) = std::env::var("MCP_URL") {
            self.server.base_url = Some(val);
        }
        if self.upstream.exercise.api_key.is_none() {
            for name in API_KEY_VARS {
                if let Ok(val) = std::env::var(name) {
                    if !val.is_empty() {
                        self.upstream.exercise.api_key = Some(val);
                        break;
                    }
                }
            }
        }
    }
}

/// General settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Enable debug mode
    pub debug: bool,
    /// Instance name displayed to connecting clients
    pub instance_name: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            debug: false,
            instance_name: "Dad Jokes MCP".to_string(),
        }
    }
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Server port
    pub port: u16,
    /// Bind address
    pub bind_address: String,
    /// Public base URL for this instance
    pub base_url: Option<String>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: 3000,
            bind_address: "127.0.0.1".to_string(),
            base_url: None,
        }
    }
}

impl ServerSettings {
    /// Effective base URL, falling back to localhost on the configured port
    pub fn base_url(&self) -> String {
        self.base_url
            .clone()
            .unwrap_or_else(|| format!("http://localhost:{}", self.port))
    }
}

/// Third-party API settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UpstreamSettings {
    pub exercise: ExerciseSettings,
    pub jokes: JokeSettings,
}

/// Exercise-search API (RapidAPI-hosted) settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExerciseSettings {
    /// API base URL
    pub base_url: String,
    /// Value for the X-RapidAPI-Host header
    pub host: String,
    /// API key; populated from the environment when absent
    pub api_key: Option<String>,
}

impl Default for ExerciseSettings {
    fn default() -> Self {
        Self {
            base_url: "https://musclewiki-api.p.rapidapi.com".to_string(),
            host: "musclewiki-api.p.rapidapi.com".to_string(),
            api_key: None,
        }
    }
}

impl ExerciseSettings {
    /// Resolve the API key, failing when it was never configured
    pub fn resolve_key(&self) -> Result<&str> {
        self.api_key.as_deref().ok_or_else(|| {
            Error::Configuration(format!(
                "missing RapidAPI key: set {} or {}",
                API_KEY_VARS[0], API_KEY_VARS[1]
            ))
        })
    }

    /// Headers every exercise API request carries
    pub fn headers(&self) -> Result<HashMap<String, String>> {
        let key = self.resolve_key()?;
        let mut headers = HashMap::new();
        headers.insert("X-RapidAPI-Key".to_string(), key.to_string());
        headers.insert("X-RapidAPI-Host".to_string(), self.host.clone());
        headers.insert("Accept".to_string(), "application/json".to_string());
        Ok(headers)
    }

    /// Full URL for the search endpoint
    pub fn search_url(&self) -> String {
        format!("{}/search", self.base_url.trim_end_matches('/'))
    }

    /// Full URL for the muscle-group listing endpoint
    pub fn muscles_url(&self) -> String {
        format!("{}/muscles", self.base_url.trim_end_matches('/'))
    }
}

/// Dad-joke API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct JokeSettings {
    /// Joke API URL
    pub url: String,
    /// User-Agent sent to the joke API
    pub user_agent: String,
}

impl Default for JokeSettings {
    fn default() -> Self {
        Self {
            url: "https://icanhazdadjoke.com/".to_string(),
            user_agent: "dad-jokes-mcp".to_string(),
        }
    }
}

/// Outgoing request settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutgoingSettings {
    /// Request timeout in seconds
    pub request_timeout: f64,
    /// Pool max idle connections per host
    pub pool_maxsize: usize,
    /// Verify SSL certificates
    pub verify_ssl: bool,
    /// Proxy settings
    pub proxies: ProxySettings,
}

impl Default for OutgoingSettings {
    fn default() -> Self {
        Self {
            request_timeout: crate::DEFAULT_TIMEOUT as f64,
            pool_maxsize: 20,
            verify_ssl: true,
            proxies: ProxySettings::default(),
        }
    }
}

/// Proxy settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxySettings {
    pub http: Option<String>,
    pub https: Option<String>,
    pub all: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.server.port, 3000);
        assert!(!settings.general.debug);
        assert!(settings.upstream.exercise.api_key.is_none());
        assert_eq!(settings.server.base_url(), "http://localhost:3000");
    }

    #[test]
    fn test_missing_key_names_both_variables() {
        let exercise = ExerciseSettings::default();
        let err = exercise.resolve_key().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("RAPIDAPI_KEY"));
        assert!(message.contains("MUSCLEWIKI_API_KEY"));
    }

    #[test]
    fn test_headers_carry_key_and_host() {
        let exercise = ExerciseSettings {
            api_key: Some("secret".to_string()),
            ..Default::default()
        };
        let headers = exercise.headers().unwrap();
        assert_eq!(headers.get("X-RapidAPI-Key").unwrap(), "secret");
        assert_eq!(
            headers.get("X-RapidAPI-Host").unwrap(),
            "musclewiki-api.p.rapidapi.com"
        );
    }

    #[test]
    fn test_endpoint_urls() {
        let exercise = ExerciseSettings {
            base_url: "https://example.test/".to_string(),
            ..Default::default()
        };
        assert_eq!(exercise.search_url(), "https://example.test/search");
        assert_eq!(exercise.muscles_url(), "https://example.test/muscles");
    }

    #[test]
    fn test_explicit_base_url_wins() {
        let server = ServerSettings {
            base_url: Some("https://tools.example.com".to_string()),
            ..Default::default()
        };
        assert_eq!(server.base_url(), "https://tools.example.com");
    }
}

//! Random dad-joke tool
//!
//! Proxies icanhazdadjoke.com, which returns a stable `{id, joke}` pair
//! when asked for JSON.

use super::traits::{Tool, ToolOutput};
use crate::config::Settings;
use crate::error::Result;
use crate::network::HttpClient;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// One joke as served by the upstream API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DadJoke {
    pub id: String,
    pub joke: String,
}

/// Tool fetching a random dad joke
pub struct DadJokeTool {
    settings: Arc<Settings>,
    client: HttpClient,
}

impl DadJokeTool {
    pub fn new(settings: Arc<Settings>, client: HttpClient) -> Self {
        Self { settings, client }
    }
}

#[async_trait]
impl Tool for DadJokeTool {
    fn name(&self) -> &str {
        "get-dad-joke"
    }

    fn description(&self) -> &str {
        "Fetch a random dad joke from icanhazdadjoke.com"
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {}
        })
    }

    fn output_schema(&self) -> Option<Value> {
        Some(json!({
            "type": "object",
            "properties": {
                "id": {"type": "string"},
                "joke": {"type": "string"}
            },
            "required": ["id", "joke"]
        }))
    }

    async fn call(&self, _args: &Value) -> Result<ToolOutput> {
        let jokes = &self.settings.upstream.jokes;

        let mut headers = HashMap::new();
        headers.insert("Accept".to_string(), "application/json".to_string());
        headers.insert("User-Agent".to_string(), jokes.user_agent.clone());

        let response = self
            .client
            .get(&jokes.url, &headers, &[])
            .await?
            .ensure_success()?;

        let joke: DadJoke = serde_json::from_str(&response.text)?;
        debug!("Fetched joke {}", joke.id);

        Ok(ToolOutput::new(joke.joke.clone(), json!(joke)))
    }
}

//! Muscle-group listing tool
//!
//! Fetches the exercise API's muscle listing and flattens it into a
//! sorted, deduplicated set of group names.

use super::traits::{Tool, ToolOutput};
use crate::config::Settings;
use crate::error::Result;
use crate::network::HttpClient;
use crate::results::aggregate_groups;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::debug;

/// Tool listing the known muscle groups
pub struct MuscleGroupsTool {
    settings: Arc<Settings>,
    client: HttpClient,
}

impl MuscleGroupsTool {
    pub fn new(settings: Arc<Settings>, client: HttpClient) -> Self {
        Self { settings, client }
    }
}

#[async_trait]
impl Tool for MuscleGroupsTool {
    fn name(&self) -> &str {
        "musclewiki-list-groups"
    }

    fn description(&self) -> &str {
        "List MuscleWiki muscle groups"
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
                "groups": {
                    "type": "array",
                    "items": {"type": "string"}
                }
            },
            "required": ["groups"]
        }))
    }

    async fn call(&self, _args: &Value) -> Result<ToolOutput> {
        let exercise = &self.settings.upstream.exercise;
        let headers = exercise.headers()?;

        let response = self
            .client
            .get(&exercise.muscles_url(), &headers, &[])
            .await?
            .ensure_success()?;

        let groups = serde_json::from_str::<Value>(&response.text)
            .map(|payload| aggregate_groups(&payload))
            .unwrap_or_default();

        debug!("Listed {} muscle groups", groups.len());

        Ok(ToolOutput::from_structured(json!({ "groups": groups })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn tool_for(server: &MockServer) -> MuscleGroupsTool {
        let mut settings = Settings::default();
        settings.upstream.exercise.base_url = server.uri();
        settings.upstream.exercise.api_key = Some("test-key".to_string());
        MuscleGroupsTool::new(Arc::new(settings), HttpClient::new().unwrap())
    }

    #[tokio::test]
    async fn test_lists_sorted_groups() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/muscles"))
            .and(header("X-RapidAPI-Key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                "Chest",
                {"group": "Back"},
                {"name": ["Legs", "Legs"]}
            ])))
            .mount(&server)
            .await;

        let output = tool_for(&server).call(&Value::Null).await.unwrap();
        assert_eq!(output.structured["groups"], json!(["Back", "Chest", "Legs"]));
    }

    #[tokio::test]
    async fn test_unparseable_listing_yields_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/muscles"))
            .respond_with(ResponseTemplate::new(200).set_body_string("oops"))
            .mount(&server)
            .await;

        let output = tool_for(&server).call(&Value::Null).await.unwrap();
        assert_eq!(output.structured["groups"], json!([]));
    }

    #[tokio::test]
    async fn test_upstream_failure_is_surfaced() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/muscles"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let err = tool_for(&server).call(&Value::Null).await.unwrap_err();
        assert!(matches!(err, crate::Error::Upstream { status: 500, .. }));
    }
}

//! Exercise search tool
//!
//! Extracts a query from loosely-shaped arguments, calls the exercise
//! API's search endpoint, and normalizes whatever shape comes back into a
//! flat result list. A blank query is answered locally with an empty list
//! rather than treated as an error, so widgets can render an empty state.

use super::traits::{Tool, ToolOutput};
use crate::config::Settings;
use crate::error::Result;
use crate::network::HttpClient;
use crate::query::extract_query;
use crate::results::find_result_list;
use crate::DEFAULT_RESULT_LIMIT;
use async_trait::async_trait;
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::debug;

/// How much of the raw response body the debug trace keeps.
const RAW_BODY_LIMIT: usize = 500;

/// Diagnostics carried alongside search results. Never inspected for
/// control flow; absent when no upstream request was made.
#[derive(Debug, Clone, Serialize)]
pub struct DebugTrace {
    /// Resolved request URL
    pub url: String,
    /// HTTP status code of the response
    pub status: u16,
    /// Truncated copy of the raw response body
    pub raw: String,
}

impl DebugTrace {
    fn new(url: String, status: u16, body: &str) -> Self {
        Self {
            url,
            status,
            raw: body.chars().take(RAW_BODY_LIMIT).collect(),
        }
    }
}

/// Tool searching the exercise database by keyword
pub struct ExerciseSearchTool {
    settings: Arc<Settings>,
    client: HttpClient,
}

impl ExerciseSearchTool {
    pub fn new(settings: Arc<Settings>, client: HttpClient) -> Self {
        Self { settings, client }
    }
}

#[async_trait]
impl Tool for ExerciseSearchTool {
    fn name(&self) -> &str {
        "musclewiki-search-v3"
    }

    fn description(&self) -> &str {
        "Search MuscleWiki exercises by keyword"
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Search query for exercises"
                },
                "limit": {
                    "type": "integer",
                    "description": "Maximum number of results",
                    "minimum": 1
                }
            },
            "required": ["query"]
        })
    }

    fn output_schema(&self) -> Option<Value> {
        Some(json!({
            "type": "object",
            "properties": {
                "results": {
                    "type": "array",
                    "items": {"type": "object"}
                },
                "debug": {
                    "type": "object",
                    "properties": {
                        "url": {"type": "string"},
                        "status": {"type": "integer"},
                        "raw": {"type": "string"}
                    }
                }
            },
            "required": ["results"]
        }))
    }

    async fn call(&self, args: &Value) -> Result<ToolOutput> {
        let raw_query = extract_query(args);
        let query = raw_query.trim();

        if query.is_empty() {
            debug!("Blank exercise query, skipping upstream call");
            return Ok(ToolOutput::from_structured(json!({ "results": [] })));
        }

        let limit = args
            .get("limit")
            .and_then(Value::as_u64)
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_RESULT_LIMIT);

        let exercise = &self.settings.upstream.exercise;
        let headers = exercise.headers()?;

        let response = self
            .client
            .get(
                &exercise.search_url(),
                &headers,
                &[("q", query.to_string()), ("limit", limit.to_string())],
            )
            .await?
            .ensure_success()?;

        // Second-pass speculative parse: keep the raw bytes for the trace,
        // and fall back to an empty list when the body is not JSON or no
        // result list is found inside it.
        let results = serde_json::from_str::<Value>(&response.text)
            .ok()
            .and_then(|payload| find_result_list(&payload))
            .unwrap_or_default();

        debug!(
            "Exercise search '{}' returned {} results (status {})",
            query,
            results.len(),
            response.status
        );

        let trace = DebugTrace::new(response.url, response.status, &response.text);

        Ok(ToolOutput::from_structured(json!({
            "results": results,
            "debug": trace,
        })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn tool_for(server: &MockServer) -> ExerciseSearchTool {
        let mut settings = Settings::default();
        settings.upstream.exercise.base_url = server.uri();
        settings.upstream.exercise.api_key = Some("test-key".to_string());
        ExerciseSearchTool::new(Arc::new(settings), HttpClient::new().unwrap())
    }

    #[tokio::test]
    async fn test_blank_query_short_circuits() {
        // No API key configured and no server running: a blank query must
        // not touch either.
        let tool = ExerciseSearchTool::new(
            Arc::new(Settings::default()),
            HttpClient::new().unwrap(),
        );

        let output = tool.call(&json!({"query": "   "})).await.unwrap();
        assert_eq!(output.structured["results"], json!([]));
        assert!(output.structured.get("debug").is_none());
    }

    #[tokio::test]
    async fn test_search_normalizes_bare_array() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("q", "push up"))
            .and(query_param("limit", "10"))
            .and(header("X-RapidAPI-Key", "test-key"))
            .and(header("X-RapidAPI-Host", "musclewiki-api.p.rapidapi.com"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([{"name": "Push Up"}, {"name": "Pike Push Up"}])),
            )
            .mount(&server)
            .await;

        let output = tool_for(&server)
            .call(&json!({"query": "push up"}))
            .await
            .unwrap();

        let results = output.structured["results"].as_array().unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(output.structured["debug"]["status"], 200);
        assert!(output.structured["debug"]["url"]
            .as_str()
            .unwrap()
            .contains("/search"));
    }

    #[tokio::test]
    async fn test_custom_limit_forwarded() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("limit", "3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
            .mount(&server)
            .await;

        let output = tool_for(&server)
            .call(&json!({"query": "squat", "limit": 3}))
            .await
            .unwrap();
        assert_eq!(output.structured["results"], json!([]));
    }

    #[tokio::test]
    async fn test_rate_limit_surfaces_status_and_truncated_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(429).set_body_string("too many requests ".repeat(20)))
            .mount(&server)
            .await;

        let err = tool_for(&server)
            .call(&json!({"query": "squat"}))
            .await
            .unwrap_err();

        match err {
            crate::Error::Upstream { status, body } => {
                assert_eq!(status, 429);
                assert_eq!(body.chars().count(), 100);
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[tokio::test]
    async fn test_unparseable_body_yields_empty_results() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>surprise</html>"))
            .mount(&server)
            .await;

        let output = tool_for(&server)
            .call(&json!({"query": "squat"}))
            .await
            .unwrap();
        assert_eq!(output.structured["results"], json!([]));
        // The trace still carries the raw body for diagnosis.
        assert!(output.structured["debug"]["raw"]
            .as_str()
            .unwrap()
            .contains("surprise"));
    }

    #[tokio::test]
    async fn test_missing_key_is_a_configuration_error() {
        let server = MockServer::start().await;
        let mut settings = Settings::default();
        settings.upstream.exercise.base_url = server.uri();
        let tool = ExerciseSearchTool::new(Arc::new(settings), HttpClient::new().unwrap());

        let err = tool.call(&json!({"query": "squat"})).await.unwrap_err();
        assert!(matches!(err, crate::Error::Configuration(_)));
    }
}

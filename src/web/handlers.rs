//! HTTP request handlers

use super::state::AppState;
use crate::error::Error;
use crate::protocol::{
    CallToolParams, CallToolResult, InitializeResult, JsonRpcRequest, JsonRpcResponse, ServerInfo,
    ToolsListResult, JSONRPC_VERSION, PROTOCOL_VERSION,
};
use crate::results::find_result_list;
use axum::{
    extract::{Query, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::warn;
use url::Url;

/// How much of an upstream error body the REST mirror echoes back.
const DETAILS_LIMIT: usize = 200;

fn to_value(value: impl Serialize) -> Value {
    serde_json::to_value(value).unwrap_or(Value::Null)
}

/// JSON-RPC tool endpoint handler
pub async fn rpc(State(state): State<AppState>, Json(request): Json<JsonRpcRequest>) -> Response {
    if request.jsonrpc != JSONRPC_VERSION {
        let response = JsonRpcResponse::error(Value::Null, -32600, "invalid request");
        return Json(response).into_response();
    }

    // Notifications carry no id and expect no body
    let Some(id) = request.id else {
        return StatusCode::ACCEPTED.into_response();
    };

    let response = match request.method.as_str() {
        "initialize" => handle_initialize(&state, id),
        "ping" => JsonRpcResponse::success(id, json!({})),
        "tools/list" => handle_tools_list(&state, id),
        "tools/call" => handle_tools_call(&state, id, request.params).await,
        other => JsonRpcResponse::error(id, -32601, format!("method not found: {}", other)),
    };

    Json(response).into_response()
}

fn handle_initialize(state: &AppState, id: Value) -> JsonRpcResponse {
    let result = InitializeResult {
        protocol_version: PROTOCOL_VERSION.to_string(),
        capabilities: json!({"tools": {}}),
        server_info: ServerInfo {
            name: env!("CARGO_PKG_NAME").to_string(),
            title: Some(state.instance_name().to_string()),
            version: crate::VERSION.to_string(),
        },
    };
    JsonRpcResponse::success(id, to_value(result))
}

fn handle_tools_list(state: &AppState, id: Value) -> JsonRpcResponse {
    let result = ToolsListResult {
        tools: state.registry.descriptors(),
    };
    JsonRpcResponse::success(id, to_value(result))
}

async fn handle_tools_call(state: &AppState, id: Value, params: Option<Value>) -> JsonRpcResponse {
    let params: CallToolParams = match params.map(serde_json::from_value).transpose() {
        Ok(Some(params)) => params,
        _ => {
            return JsonRpcResponse::error(id, -32602, "invalid tools/call parameters");
        }
    };

    let Some(tool) = state.registry.get(&params.name) else {
        let err = Error::UnknownTool(params.name);
        return JsonRpcResponse::error(id, err.rpc_code(), err.to_string());
    };

    match tool.call(&params.arguments).await {
        Ok(output) => {
            let result: CallToolResult = output.into();
            JsonRpcResponse::success(id, to_value(result))
        }
        Err(e) => {
            warn!("Tool {} failed: {}", params.name, e);
            JsonRpcResponse::error(id, e.rpc_code(), e.to_string())
        }
    }
}

/// Query parameters for the REST search mirror
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub query: Option<String>,
    pub limit: Option<u64>,
}

/// REST mirror of the exercise search
pub async fn search(State(state): State<AppState>, Query(params): Query<SearchParams>) -> Response {
    let query = params.q.or(params.query).unwrap_or_default();
    let query = query.trim();
    if query.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Missing 'q' or 'query' parameter"})),
        )
            .into_response();
    }

    let limit = params
        .limit
        .filter(|n| *n > 0)
        .unwrap_or(crate::DEFAULT_RESULT_LIMIT);

    let exercise = &state.settings.upstream.exercise;
    let headers = match exercise.headers() {
        Ok(headers) => headers,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": e.to_string()})),
            )
                .into_response();
        }
    };

    let response = match state
        .client
        .get(
            &exercise.search_url(),
            &headers,
            &[("q", query.to_string()), ("limit", limit.to_string())],
        )
        .await
    {
        Ok(response) => response,
        Err(e) => {
            warn!("Exercise search request failed: {}", e);
            return (StatusCode::BAD_GATEWAY, Json(json!({"error": e.to_string()})))
                .into_response();
        }
    };

    if !response.is_success() {
        let status =
            StatusCode::from_u16(response.status).unwrap_or(StatusCode::BAD_GATEWAY);
        let details: String = response.text.chars().take(DETAILS_LIMIT).collect();
        return (
            status,
            Json(json!({
                "error": format!("exercise API error ({})", response.status),
                "details": details,
            })),
        )
            .into_response();
    }

    let results = serde_json::from_str::<Value>(&response.text)
        .ok()
        .and_then(|payload| find_result_list(&payload))
        .unwrap_or_default();

    Json(json!({ "results": results })).into_response()
}

/// Query parameters for the image proxy
#[derive(Debug, Deserialize)]
pub struct ImageProxyParams {
    pub url: Option<String>,
}

/// Image proxy handler
///
/// Fetches the given absolute URL with the exercise API headers attached,
/// so media hosts that require the key still work from a plain `<img>`
/// tag in the widget.
pub async fn image_proxy(
    State(state): State<AppState>,
    Query(params): Query<ImageProxyParams>,
) -> Response {
    let Some(target) = params.url.filter(|u| !u.trim().is_empty()) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Missing 'url' parameter"})),
        )
            .into_response();
    };

    let is_absolute_http = Url::parse(&target)
        .map(|u| matches!(u.scheme(), "http" | "https"))
        .unwrap_or(false);
    if !is_absolute_http {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "'url' must be an absolute http(s) URL"})),
        )
            .into_response();
    }

    let headers = match state.settings.upstream.exercise.headers() {
        Ok(headers) => headers,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": e.to_string()})),
            )
                .into_response();
        }
    };

    match state.client.get_bytes(&target, &headers).await {
        Ok(raw) => {
            // Pass the upstream status through, success or not
            let status = StatusCode::from_u16(raw.status).unwrap_or(StatusCode::BAD_GATEWAY);
            let content_type = raw.content_type.clone();
            let content_length = raw.content_length.clone();

            let mut response = (status, raw.body).into_response();
            let response_headers = response.headers_mut();
            if let Some(value) = content_type.and_then(|v| HeaderValue::from_str(&v).ok()) {
                response_headers.insert(header::CONTENT_TYPE, value);
            }
            if let Some(value) = content_length.and_then(|v| HeaderValue::from_str(&v).ok()) {
                response_headers.insert(header::CONTENT_LENGTH, value);
            }
            response_headers.insert(
                header::CACHE_CONTROL,
                HeaderValue::from_static("public, max-age=3600"),
            );
            response
        }
        Err(e) => {
            warn!("Image proxy fetch failed: {}", e);
            (StatusCode::BAD_GATEWAY, Json(json!({"error": e.to_string()}))).into_response()
        }
    }
}

/// Health check handler
pub async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "version": crate::VERSION
    }))
}

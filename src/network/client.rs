//! HTTP client for making requests to third-party APIs

use crate::config::OutgoingSettings;
use crate::error::{Error, Result};
use reqwest::Client;
use std::collections::HashMap;
use std::time::Duration;

/// HTTP client wrapper with server-wide outgoing configuration
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self> {
        Self::with_settings(&OutgoingSettings::default())
    }

    /// Create a new HTTP client with custom settings
    pub fn with_settings(settings: &OutgoingSettings) -> Result<Self> {
        let mut builder = Client::builder()
            .timeout(Duration::from_secs_f64(settings.request_timeout))
            .pool_max_idle_per_host(settings.pool_maxsize)
            .gzip(true)
            .brotli(true);

        // SSL verification
        if !settings.verify_ssl {
            builder = builder.danger_accept_invalid_certs(true);
        }

        // Proxy settings
        if let Some(ref proxy_url) = settings.proxies.all {
            builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
        } else {
            if let Some(ref http) = settings.proxies.http {
                builder = builder.proxy(reqwest::Proxy::http(http)?);
            }
            if let Some(ref https) = settings.proxies.https {
                builder = builder.proxy(reqwest::Proxy::https(https)?);
            }
        }

        let client = builder.build()?;

        Ok(Self { client })
    }

    /// GET a URL, returning the response body as text.
    ///
    /// Transport failures (including timeouts) become [`Error::Transport`].
    /// Non-2xx statuses are NOT an error here; callers decide via
    /// [`UpstreamResponse::ensure_success`] so the raw body stays available.
    pub async fn get(
        &self,
        url: &str,
        headers: &HashMap<String, String>,
        params: &[(&str, String)],
    ) -> Result<UpstreamResponse> {
        let mut req_builder = self.client.get(url);

        for (key, value) in headers {
            req_builder = req_builder.header(key, value);
        }

        if !params.is_empty() {
            req_builder = req_builder.query(params);
        }

        let response = req_builder.send().await?;

        let status = response.status().as_u16();
        let url = response.url().to_string();

        let mut response_headers = HashMap::new();
        for (key, value) in response.headers() {
            if let Ok(v) = value.to_str() {
                response_headers.insert(key.to_string(), v.to_string());
            }
        }

        let text = response.text().await?;

        Ok(UpstreamResponse {
            status,
            headers: response_headers,
            text,
            url,
        })
    }

    /// GET a URL, returning the response body as bytes.
    ///
    /// Used by the image proxy, where the body is passed through untouched.
    pub async fn get_bytes(
        &self,
        url: &str,
        headers: &HashMap<String, String>,
    ) -> Result<RawResponse> {
        let mut req_builder = self.client.get(url);

        for (key, value) in headers {
            req_builder = req_builder.header(key, value);
        }

        let response = req_builder.send().await?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_string());
        let content_length = response
            .headers()
            .get(reqwest::header::CONTENT_LENGTH)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_string());

        let body = response.bytes().await?.to_vec();

        Ok(RawResponse {
            status,
            content_type,
            content_length,
            body,
        })
    }
}

/// Text response from a third-party API
#[derive(Debug)]
pub struct UpstreamResponse {
    /// HTTP status code
    pub status: u16,
    /// Response headers
    pub headers: HashMap<String, String>,
    /// Response body as text
    pub text: String,
    /// Response URL (after redirects)
    pub url: String,
}

impl UpstreamResponse {
    /// Check if response is successful (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Turn a non-2xx response into an [`Error::Upstream`] carrying the
    /// status and a truncated copy of the body.
    pub fn ensure_success(self) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(Error::upstream(self.status, &self.text))
        }
    }
}

/// Binary response from a third-party API
#[derive(Debug)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,
    /// Content-Type header, when present
    pub content_type: Option<String>,
    /// Content-Length header, when present
    pub content_length: Option<String>,
    /// Response body
    pub body: Vec<u8>,
}

use std::time::Duration;

use reqwest::{
    Client as HttpClient,
    header::{CONTENT_TYPE, HeaderMap, HeaderValue},
};

use crate::{
    api::{MessagesRequest, MessagesResponse},
    error::AnthropicError,
};

const DEFAULT_BASE_URL: &str = "https://api.anthropic.com/v1";

/// API version header Anthropic requires on every call.
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Minimal HTTP client for Anthropic's *messages* endpoint.
///
/// * Non-streaming only (one request ▶ one response).
/// * Accepts and returns the `api` request / response structs defined in
///   this crate.
/// * Shares a single `reqwest::Client`, so cloning `AnthropicClient` is
///   cheap.
#[derive(Clone, Debug)]
pub struct AnthropicClient {
    api_key: String,
    http: HttpClient,
    base: String,
}

impl AnthropicClient {
    /// Convenience constructor building a default `reqwest` client:
    /// 30 s timeout, Rustls TLS.
    pub fn new(api_key: impl Into<String>) -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("building reqwest client");

        Self::with_http(api_key, http, None)
    }

    /// Build with a custom `reqwest::Client` in case the caller needs proxy
    /// settings, custom TLS, etc.
    pub fn with_http(
        api_key: impl Into<String>,
        http: HttpClient,
        base_url: Option<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            http,
            base: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_owned()),
        }
    }

    /// Perform a **non-streaming** message creation.
    ///
    /// `timeout` overrides the client-wide 30 s timeout for this call only;
    /// it is how the facade's per-request timeout option reaches the
    /// transport.
    pub async fn create_message(
        &self,
        request: MessagesRequest,
        timeout: Option<Duration>,
    ) -> Result<MessagesResponse, AnthropicError> {
        // Build headers once.
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            "x-api-key",
            HeaderValue::from_str(&self.api_key).unwrap(),
        );
        headers.insert(
            "anthropic-version",
            HeaderValue::from_static(ANTHROPIC_VERSION),
        );

        let url = format!("{}/messages", self.base);

        #[cfg(feature = "tracing")]
        tracing::debug!(model = %request.model, %url, "sending messages request");

        let mut builder = self.http.post(url).headers(headers).json(&request);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let resp = builder.send().await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            #[cfg(feature = "tracing")]
            tracing::warn!(%status, "messages request failed");
            return Err(AnthropicError::Api { status, body });
        }

        let bytes = resp.bytes().await?;
        let parsed: MessagesResponse = serde_json::from_slice(&bytes)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            id = %parsed.id,
            input_tokens = parsed.usage.input_tokens,
            output_tokens = parsed.usage.output_tokens,
            "messages request completed"
        );

        Ok(parsed)
    }
}

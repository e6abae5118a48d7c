use std::{env, sync::Arc};

use hadid_core::error::HadidError;

use crate::client::AnthropicClient;

/// Thin wrapper that wires the HTTP client [`AnthropicClient`] into a value
/// that implements [`hadid_core::provider::GenerationProvider`].
///
/// The type itself purposefully exposes **no additional methods** — all
/// user-facing functionality sits on the generic
/// [`hadid_core::HadidClient`] once the adapter is plugged in.
#[derive(Debug)]
pub struct AnthropicAdapter {
    pub(crate) client: Arc<AnthropicClient>,
}

/// Builder for [`AnthropicAdapter`].
///
/// # Typical usage
///
/// ```rust,no_run
/// use hadid_anthropic::AnthropicAdapterBuilder;
///
/// let backend = AnthropicAdapterBuilder::new_from_env()
///     .build()
///     .expect("ANTHROPIC_API_KEY must be set");
/// ```
///
/// The builder pattern keeps future options (proxy URL, custom base URL, …)
/// backwards compatible without breaking existing `build()` calls.
#[derive(Default)]
pub struct AnthropicAdapterBuilder {
    pub(crate) api_key: Option<String>,
    pub(crate) base_url: Option<String>,
}

impl AnthropicAdapterBuilder {
    /// Create an *empty* builder. Remember to supply an API key manually.
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience constructor that tries to load the `ANTHROPIC_API_KEY`
    /// environment variable. Missing keys only surface during
    /// [`Self::build`].
    pub fn new_from_env() -> Self {
        Self {
            api_key: env::var("ANTHROPIC_API_KEY").ok(),
            base_url: None,
        }
    }

    /// Supply the API key explicitly.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Point the adapter at a non-default endpoint (gateways, test servers).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Finalise the builder and return a ready-to-use adapter.
    ///
    /// # Errors
    ///
    /// * [`HadidError::Invalid`] – if the API key is missing.
    pub fn build(self) -> hadid_core::Result<AnthropicAdapter> {
        let api_key = self.api_key.ok_or(HadidError::Invalid(
            "missing env variable: `ANTHROPIC_API_KEY`".into(),
        ))?;

        let client = match self.base_url {
            Some(base) => {
                let http = reqwest::Client::builder()
                    .timeout(std::time::Duration::from_secs(30))
                    .build()
                    .expect("building reqwest client");
                AnthropicClient::with_http(api_key, http, Some(base))
            }
            None => AnthropicClient::new(api_key),
        };

        Ok(AnthropicAdapter {
            client: Arc::new(client),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_without_key_is_an_invalid_error() {
        let err = AnthropicAdapterBuilder::new().build().unwrap_err();
        assert!(matches!(err, HadidError::Invalid(_)));
    }

    #[test]
    fn build_with_key_succeeds() {
        let adapter = AnthropicAdapterBuilder::new()
            .with_api_key("sk-ant-test")
            .build();
        assert!(adapter.is_ok());
    }
}

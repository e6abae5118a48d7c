//! Request and result types passed through the generation facade.
//!
//! A [`GenerationRequest`] is constructed per call and never persisted. The
//! builder-style `with_*` methods keep call sites linear:
//!
//! ```rust
//! use hadid_core::{GenerationOptions, GenerationRequest, SystemPrompt};
//!
//! let request = GenerationRequest::new("Convert this receipt to markdown.")
//!     .with_system_prompt(SystemPrompt::Named("extraction".into()))
//!     .with_options(GenerationOptions::default().with_max_tokens(1024));
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::model::Model;

/// How the system prompt for a call is selected.
///
/// Absent (`GenerationRequest::system_prompt == None`) means the registry
/// default is used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SystemPrompt {
    /// Look the prompt up in the registry by name. Unknown names fail the
    /// call before the backend is contacted.
    Named(String),
    /// Use the given text verbatim. An explicitly empty override is
    /// forwarded as-is.
    Inline(String),
}

/// Caller-supplied input to the facade.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// User-provided content. Must be non-empty after trimming.
    pub content: String,
    /// Optional system-prompt selection; `None` selects the default.
    pub system_prompt: Option<SystemPrompt>,
    /// Backend configuration, forwarded opaquely.
    pub options: GenerationOptions,
}

impl GenerationRequest {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            system_prompt: None,
            options: GenerationOptions::default(),
        }
    }

    pub fn with_system_prompt(mut self, system_prompt: SystemPrompt) -> Self {
        self.system_prompt = Some(system_prompt);
        self
    }

    pub fn with_options(mut self, options: GenerationOptions) -> Self {
        self.options = options;
        self
    }
}

/// Backend knobs this system forwards without interpreting.
///
/// `timeout` is the extension point for callers that cannot tolerate an
/// indefinitely blocking backend; adapters apply it to their transport.
#[derive(Debug, Clone, Default)]
pub struct GenerationOptions {
    pub model: Option<Model>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f64>,
    pub timeout: Option<Duration>,
}

impl GenerationOptions {
    pub fn with_model(mut self, model: impl Into<Model>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// What the backend returned for one request. The facade passes this through
/// verbatim; it never transforms or caches it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResult {
    /// Generated text, exactly as the backend produced it.
    pub content: String,
    /// Token accounting, when the backend reports it.
    pub usage: Option<UsageReport>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct UsageReport {
    pub input_tokens: i64,
    pub output_tokens: i64,
}

//! Unified error type exposed by **`hadid-core`**.
//!
//! Provider crates convert their internal errors into boxed trait objects
//! before bubbling them up; [`HadidClient`](crate::client::HadidClient) wraps
//! those into [`HadidError::Backend`] together with provenance information
//! (when the call was made and which prompt was in effect).

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Convenient alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, HadidError>;

/// Error type a backend hands back through the
/// [`GenerationProvider`](crate::provider::GenerationProvider) seam.
pub type BoxedBackendError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum HadidError {
    /// Caller-supplied request failed local validation (e.g. empty content).
    /// Detected before any backend call, never retried.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A requested named prompt does not exist in the registry.
    #[error("unknown prompt `{name}`")]
    UnknownPrompt { name: String },

    /// The external generation backend failed. Subtypes (network, auth,
    /// quota) are not distinguished; the backend's own diagnostic is carried
    /// in `source`, with the prompt name and call timestamp attached.
    #[error("backend error (prompt `{prompt}`, at {at}): {source}")]
    Backend {
        /// Name of the system prompt that was in effect for the failed call.
        prompt: String,
        /// UTC timestamp taken when the failure was observed.
        at: DateTime<Utc>,
        #[source]
        source: BoxedBackendError,
    },

    /// Construction or configuration fault (e.g. missing API key).
    #[error("invalid: {0}")]
    Invalid(String),
}

impl From<hadid_prompt::UnknownPromptError> for HadidError {
    fn from(err: hadid_prompt::UnknownPromptError) -> Self {
        Self::UnknownPrompt { name: err.name }
    }
}

impl HadidError {
    /// Wrap a backend failure, stamping it with the prompt name that was in
    /// effect and the current UTC time.
    pub fn backend(prompt: impl Into<String>, source: BoxedBackendError) -> Self {
        Self::Backend {
            prompt: prompt.into(),
            at: Utc::now(),
            source,
        }
    }
}

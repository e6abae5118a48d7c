//! The seam between the facade and a concrete generation backend.
//!
//! A **backend** turns a composed call into a request against a concrete
//! provider (Anthropic, a local process, a test double, …) and hands back the
//! provider's result untouched. The trait is intentionally minimal — one
//! method, request in, result-or-error out — so the concrete backend can be
//! swapped or mocked without touching the client.
//!
//! The method returns a [`Pin<Box<dyn Future>>`] so the trait stays
//! object-safe without pulling in `async_trait`.

use std::{future::Future, pin::Pin};

use crate::{
    error::BoxedBackendError,
    request::{GenerationOptions, GenerationResult},
};

/// The composed backend call: resolved system prompt, user content and the
/// forwarded options. Built by the client after local validation, never by
/// callers directly.
#[derive(Debug, Clone)]
pub struct BackendCall {
    pub system_prompt: String,
    pub content: String,
    pub options: GenerationOptions,
}

/// A single-operation generation backend.
///
/// Implementations report failures through their own error types, boxed; the
/// client wraps them with provenance. Backends must not retry internally —
/// retry, if desired, is the caller's responsibility.
pub trait GenerationProvider: Send + Sync {
    /// Perform one non-streaming generation round-trip.
    fn generate<'p>(
        &'p self,
        call: BackendCall,
    ) -> Pin<Box<dyn Future<Output = std::result::Result<GenerationResult, BoxedBackendError>> + Send + 'p>>;
}

//! # `hadid-core` – provider-agnostic building blocks
//!
//! Everything in this crate is independent of any concrete LLM provider:
//!
//! * [`GenerationRequest`](request::GenerationRequest) – what a caller hands
//!   to the facade (content, optional system-prompt selection, forwarded
//!   options).
//! * [`GenerationProvider`](provider::GenerationProvider) – the one-operation
//!   seam a backend crate implements (request in, result or error out).
//! * [`HadidClient`](client::HadidClient) – the generic client that validates
//!   input, resolves the system prompt and delegates to a backend.
//! * [`HadidError`](error::HadidError) – the unified error type.
//!
//! Backend crates (e.g. `hadid-anthropic`) implement `GenerationProvider` and
//! convert their internal errors into boxed sources; the client attaches
//! provenance (timestamp, resolved prompt name) when it wraps them.

pub mod client;
pub mod error;
pub mod model;
pub mod provider;
pub mod request;

pub use client::HadidClient;
pub use error::{HadidError, Result};
pub use model::{ClaudeModel, Model};
pub use request::{GenerationOptions, GenerationRequest, GenerationResult, SystemPrompt, UsageReport};

//! # `hadid` – the umbrella crate
//!
//! A *one-stop import* gluing together the building-block crates in the
//! workspace:
//!
//! | Crate                 | What it provides                                                          |
//! |-----------------------|---------------------------------------------------------------------------|
//! | **`hadid-core`**      | Provider-agnostic types (`GenerationProvider`, `HadidClient`), errors      |
//! | **`hadid-prompt`**    | Built-in system prompts, `PromptRegistry`, prompt-text builder             |
//! | **`hadid-anthropic`** | Thin HTTP client implementing the backend seam for Claude *(optional)*     |
//!
//! By default the `anthropic` feature is enabled so the [`hadid`] one-shot
//! function works out of the box; disable default features to stay fully
//! provider-agnostic:
//!
//! ```toml
//! [dependencies]
//! hadid = { version = "0.0.7", default-features = false }
//! ```
//!
//! ## Quick example
//!
//! ```rust,no_run
//! use hadid::{GenerationRequest, hadid};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     // Needs ANTHROPIC_API_KEY in the environment.
//!     let result = hadid(GenerationRequest::new("…raw page text…")).await?;
//!     println!("{}", result.content);
//!     Ok(())
//! }
//! ```
//!
//! The default system prompt is available under two names that are
//! guaranteed to be the identical value:
//! [`DEFAULT_SYSTEM_PROMPT`] and [`Prompts::DEFAULT_SYSTEM_PROMPT`].

pub use hadid_core::*;
pub use hadid_prompt as prompt;
pub use hadid_prompt::{DEFAULT_SYSTEM_PROMPT, Prompts};

#[cfg(feature = "anthropic")]
pub use hadid_anthropic as anthropic;

/// One-shot entry point: build the default Anthropic backend from the
/// environment and run a single generation.
///
/// Equivalent to constructing a [`HadidClient`] over
/// [`anthropic::AnthropicAdapterBuilder::new_from_env`] and calling
/// [`HadidClient::generate`] once. Callers issuing many requests should
/// build the client themselves and reuse it; this function creates a fresh
/// HTTP client per call.
///
/// # Errors
///
/// Everything [`HadidClient::generate`] can return, plus
/// [`HadidError`](error::HadidError)`::Invalid` when `ANTHROPIC_API_KEY` is
/// not set.
#[cfg(feature = "anthropic")]
pub async fn hadid(request: GenerationRequest) -> Result<GenerationResult> {
    let backend = anthropic::AnthropicAdapterBuilder::new_from_env().build()?;
    HadidClient::new(backend).generate(request).await
}

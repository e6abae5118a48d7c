//! Model identifiers used throughout the **hadid** workspace.
//!
//! The enum hierarchy keeps the public API simple while letting each backend
//! crate map the variants onto its own naming scheme. You never type literal
//! strings such as `"claude-3-5-sonnet-20241022"` in application code — pick
//! an enum variant and let the adapter translate it.
//!
//! # Adding more models
//!
//! 1. Add the variant to the provider-specific sub-enum ([`ClaudeModel`]).
//! 2. Update the mapping function in the backend crate
//!    (`hadid-anthropic::model_map::map_model`).
//! 3. The compiler flags any match statement you forgot.

/// Universal identifier for an LLM model.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    /// Built-in Anthropic models (Messages API).
    Anthropic(ClaudeModel),
    /// Fully qualified model ID not covered by a dedicated enum. Use this
    /// for beta snapshots or self-hosted gateways.
    Custom(&'static str),
}

/// Models officially supported by the Anthropic backend.
///
/// Keeping the list small avoids accidental typos while still allowing
/// arbitrary model names through [`Model::Custom`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClaudeModel {
    Claude35Sonnet,
    Claude35Haiku,
    Claude3Opus,
    Claude3Haiku,
}

impl From<ClaudeModel> for Model {
    fn from(val: ClaudeModel) -> Self {
        Model::Anthropic(val)
    }
}

//! Anthropic Messages API backend for the hadid SDK.
//!
//! The crate wires a minimal HTTP client for `POST /v1/messages` into a value
//! that implements [`hadid_core::provider::GenerationProvider`], so the
//! generic [`hadid_core::HadidClient`] works against Claude out of the box.

mod adapter;
mod model_map;
mod provider_impl;

pub use adapter::{AnthropicAdapter, AnthropicAdapterBuilder};
pub mod api;
mod client;
pub mod error;

//! # `hadid-prompt` – built-in prompts and their registry
//!
//! The prompt layer is deliberately dependency-free and read-only after
//! process start:
//!
//! * [`prompts`] – the prompt texts themselves, each defined exactly once.
//! * [`registry`] – name → text lookup over the built-in set.
//! * [`builder`] – a small fluent builder for composing parameterised prompt
//!   text (used for the page-consistency prompt).
//!
//! Nothing here performs I/O, so the registry can be consulted from any
//! number of concurrent callers without synchronisation.

pub mod builder;
pub mod prompts;
pub mod registry;

pub use prompts::{DEFAULT_SYSTEM_PROMPT, Prompts};
pub use registry::{DEFAULT_PROMPT_NAME, PromptRegistry, UnknownPromptError};

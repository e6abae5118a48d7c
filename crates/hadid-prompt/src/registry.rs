//! Name → prompt-text lookup over the built-in set.
//!
//! The registry is a const table: read-only after process start, no
//! synchronisation needed, referentially stable (`get` hands out the same
//! `&'static str` on every call).

use thiserror::Error;

use crate::prompts::{DEFAULT_SYSTEM_PROMPT, EXTRACTION_SYSTEM_PROMPT};

/// Registry name of the default system prompt.
pub const DEFAULT_PROMPT_NAME: &str = "default";

/// A requested named prompt does not exist in the registry.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown prompt `{name}`")]
pub struct UnknownPromptError {
    pub name: String,
}

const BUILTIN: &[(&str, &str)] = &[
    (DEFAULT_PROMPT_NAME, DEFAULT_SYSTEM_PROMPT),
    ("extraction", EXTRACTION_SYSTEM_PROMPT),
];

/// Named, immutable prompt strings.
///
/// Always contains a non-empty [`DEFAULT_PROMPT_NAME`] entry; names are
/// unique within the table.
#[derive(Debug, Clone, Copy)]
pub struct PromptRegistry {
    entries: &'static [(&'static str, &'static str)],
}

impl Default for PromptRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PromptRegistry {
    /// The registry of built-in prompts.
    pub const fn builtin() -> Self {
        Self { entries: BUILTIN }
    }

    /// Return the template registered under `name`.
    ///
    /// # Errors
    ///
    /// [`UnknownPromptError`] if the name is not registered. No side effect
    /// is performed either way.
    pub fn get(&self, name: &str) -> Result<&'static str, UnknownPromptError> {
        self.entries
            .iter()
            .find(|(entry_name, _)| *entry_name == name)
            .map(|(_, text)| *text)
            .ok_or_else(|| UnknownPromptError { name: name.into() })
    }

    /// Return the default system prompt. Always succeeds.
    pub fn default_prompt(&self) -> &'static str {
        DEFAULT_SYSTEM_PROMPT
    }

    /// Iterate over the registered prompt names.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }
}

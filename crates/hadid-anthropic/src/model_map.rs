use std::borrow::Cow;

use hadid_core::model::{ClaudeModel, Model};

pub const CLAUDE_3_5_SONNET: &str = "claude-3-5-sonnet-20241022";
pub const CLAUDE_3_5_HAIKU: &str = "claude-3-5-haiku-20241022";
pub const CLAUDE_3_OPUS: &str = "claude-3-opus-20240229";
pub const CLAUDE_3_HAIKU: &str = "claude-3-haiku-20240307";

/// Model the adapter selects when the caller passes no model option.
pub const DEFAULT_MODEL: ClaudeModel = ClaudeModel::Claude35Sonnet;

pub(crate) fn map_model(model: &Model) -> Cow<'static, str> {
    match model {
        Model::Custom(custom) => Cow::Borrowed(custom),
        Model::Anthropic(claude_model) => Cow::Borrowed(match claude_model {
            ClaudeModel::Claude35Sonnet => CLAUDE_3_5_SONNET,
            ClaudeModel::Claude35Haiku => CLAUDE_3_5_HAIKU,
            ClaudeModel::Claude3Opus => CLAUDE_3_OPUS,
            ClaudeModel::Claude3Haiku => CLAUDE_3_HAIKU,
        }),
    }
}

use std::{future::Future, pin::Pin, sync::Arc};

use hadid_core::{
    error::BoxedBackendError,
    model::Model,
    provider::{BackendCall, GenerationProvider},
    request::{GenerationResult, UsageReport},
};

use crate::{
    AnthropicAdapter,
    api::{ContentBlock, MessageParam, MessagesRequest},
    error::AnthropicError,
    model_map::{DEFAULT_MODEL, map_model},
};

/// Output-length cap sent when the caller does not set one.
const DEFAULT_MAX_TOKENS: u32 = 2048;

impl GenerationProvider for AnthropicAdapter {
    fn generate<'p>(
        &'p self,
        call: BackendCall,
    ) -> Pin<
        Box<
            dyn Future<Output = Result<GenerationResult, BoxedBackendError>> + Send + 'p,
        >,
    > {
        let client = Arc::clone(&self.client);

        Box::pin(async move {
            let request = build_request(&call);
            let timeout = call.options.timeout;

            let mut response = client.create_message(request, timeout).await?;

            let usage = UsageReport {
                input_tokens: response.usage.input_tokens,
                output_tokens: response.usage.output_tokens,
            };

            if response.content.is_empty() {
                return Err(AnthropicError::Format("response has no content".into()).into());
            }
            let ContentBlock::Text { text } = response.content.remove(0);

            Ok(GenerationResult {
                content: text,
                usage: Some(usage),
            })
        })
    }
}

fn build_request(call: &BackendCall) -> MessagesRequest {
    let model = call
        .options
        .model
        .clone()
        .unwrap_or(Model::Anthropic(DEFAULT_MODEL));

    let mut request = MessagesRequest::new(
        map_model(&model).into_owned(),
        call.options.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS),
        vec![MessageParam::user(call.content.clone())],
    )
    .system(call.system_prompt.clone());

    if let Some(temperature) = call.options.temperature {
        request = request.temperature(temperature);
    }

    request
}

#[cfg(test)]
mod tests {
    use hadid_core::request::GenerationOptions;

    use super::*;
    use crate::model_map::CLAUDE_3_5_SONNET;

    fn call_with(options: GenerationOptions) -> BackendCall {
        BackendCall {
            system_prompt: "convert to markdown".into(),
            content: "page text".into(),
            options,
        }
    }

    #[test]
    fn request_carries_system_prompt_content_and_defaults() {
        let request = build_request(&call_with(GenerationOptions::default()));
        assert_eq!(request.model, CLAUDE_3_5_SONNET);
        assert_eq!(request.max_tokens, 2048);
        assert_eq!(request.system.as_deref(), Some("convert to markdown"));
        assert_eq!(request.messages.len(), 1);
        assert_eq!(request.messages[0].content, "page text");
        assert!(request.temperature.is_none());
    }

    #[test]
    fn options_override_model_tokens_and_temperature() {
        let options = GenerationOptions::default()
            .with_model(Model::Custom("claude-next"))
            .with_max_tokens(512)
            .with_temperature(0.0);
        let request = build_request(&call_with(options));
        assert_eq!(request.model, "claude-next");
        assert_eq!(request.max_tokens, 512);
        assert_eq!(request.temperature, Some(0.0));
    }
}

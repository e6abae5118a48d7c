//! Generic, lightweight client that runs a [`GenerationRequest`] against a
//! single concrete backend.
//!
//! The client is **generic over the backend type `B`**, so the concrete
//! provider can be swapped (or mocked in tests) without dynamic dispatch.
//! It owns the whole facade contract:
//!
//! 1. validate the caller's content locally, before any external call,
//! 2. resolve the system prompt (registry default, registry name, or inline
//!    override),
//! 3. compose the backend call and issue it — once, with no retry and no
//!    caching,
//! 4. return the backend's result verbatim, or wrap its failure with
//!    provenance (prompt name, UTC timestamp).
//!
//! ```rust,no_run
//! # async fn example() -> hadid_core::Result<()> {
//! use hadid_core::{GenerationRequest, HadidClient};
//! # use hadid_core::provider::{BackendCall, GenerationProvider};
//! # use hadid_core::request::GenerationResult;
//! # struct SomeBackend;
//! # impl GenerationProvider for SomeBackend {
//! #     fn generate<'p>(&'p self, _call: BackendCall) -> std::pin::Pin<Box<dyn std::future::Future<Output = Result<GenerationResult, hadid_core::error::BoxedBackendError>> + Send + 'p>> {
//! #         Box::pin(async { Ok(GenerationResult { content: String::new(), usage: None }) })
//! #     }
//! # }
//! # let backend = SomeBackend;
//!
//! let client = HadidClient::new(backend);
//! let result = client
//!     .generate(GenerationRequest::new("Convert this page to markdown."))
//!     .await?;
//! println!("{}", result.content);
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use hadid_prompt::{DEFAULT_PROMPT_NAME, PromptRegistry};

use crate::{
    error::{HadidError, Result},
    provider::{BackendCall, GenerationProvider},
    request::{GenerationRequest, GenerationResult, SystemPrompt},
};

/// Provenance name recorded when the caller supplied an inline override
/// instead of a registry entry.
const INLINE_PROMPT_NAME: &str = "inline override";

/// A client bound to a single backend.
///
/// Clone the client if you need to share it across tasks — the backend sits
/// behind an `Arc`, so clones are cheap.
#[derive(Debug, Clone)]
pub struct HadidClient<B> {
    backend: Arc<B>,
    prompts: PromptRegistry,
}

impl<B> HadidClient<B>
where
    B: GenerationProvider,
{
    /// Create a new client that delegates all calls to `backend`, using the
    /// built-in prompt registry.
    pub fn new(backend: B) -> Self {
        Self {
            backend: Arc::new(backend),
            prompts: PromptRegistry::builtin(),
        }
    }

    /// Access the underlying backend (e.g. to tweak provider-specific
    /// settings).
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// The prompt registry this client resolves named prompts against.
    pub fn prompts(&self) -> &PromptRegistry {
        &self.prompts
    }

    /// Run one generation round-trip.
    ///
    /// # Errors
    ///
    /// * [`HadidError::InvalidInput`] – content empty or whitespace-only,
    ///   detected before the backend is contacted.
    /// * [`HadidError::UnknownPrompt`] – a named prompt was requested that
    ///   the registry does not contain; also detected locally.
    /// * [`HadidError::Backend`] – any failure the backend signalled, with
    ///   the resolved prompt name and the call timestamp attached.
    pub async fn generate(&self, request: GenerationRequest) -> Result<GenerationResult> {
        if request.content.trim().is_empty() {
            return Err(HadidError::InvalidInput(
                "content must not be empty or whitespace-only".into(),
            ));
        }

        let (prompt_name, system_prompt) = self.resolve_system_prompt(request.system_prompt)?;

        let call = BackendCall {
            system_prompt,
            content: request.content,
            options: request.options,
        };

        self.backend
            .generate(call)
            .await
            .map_err(|source| HadidError::backend(prompt_name, source))
    }

    /// Resolve the system-prompt selection into `(provenance name, text)`.
    ///
    /// An explicitly empty inline override is passed through untouched; the
    /// registry paths can never produce an empty prompt.
    fn resolve_system_prompt(
        &self,
        selection: Option<SystemPrompt>,
    ) -> Result<(String, String)> {
        match selection {
            None => Ok((
                DEFAULT_PROMPT_NAME.to_owned(),
                self.prompts.default_prompt().to_owned(),
            )),
            Some(SystemPrompt::Named(name)) => {
                let text = self.prompts.get(&name)?;
                Ok((name, text.to_owned()))
            }
            Some(SystemPrompt::Inline(text)) => Ok((INLINE_PROMPT_NAME.to_owned(), text)),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::future::Future;
    use std::pin::Pin;
    use std::sync::Mutex;

    use hadid_prompt::DEFAULT_SYSTEM_PROMPT;

    use super::*;
    use crate::error::BoxedBackendError;
    use crate::request::GenerationOptions;

    /// Backend double that records every call and replies with a canned
    /// result or a canned failure.
    struct RecordingBackend {
        calls: Mutex<Vec<BackendCall>>,
        fail_with: Option<String>,
    }

    impl RecordingBackend {
        fn succeeding() -> Self {
            Self {
                calls: Mutex::new(vec![]),
                fail_with: None,
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                calls: Mutex::new(vec![]),
                fail_with: Some(message.to_owned()),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    impl GenerationProvider for RecordingBackend {
        fn generate<'p>(
            &'p self,
            call: BackendCall,
        ) -> Pin<
            Box<
                dyn Future<Output = std::result::Result<GenerationResult, BoxedBackendError>>
                    + Send
                    + 'p,
            >,
        > {
            self.calls.lock().unwrap().push(call);
            let outcome = match &self.fail_with {
                Some(message) => Err(message.clone().into()),
                None => Ok(GenerationResult {
                    content: "# converted".to_owned(),
                    usage: None,
                }),
            };
            Box::pin(async move { outcome })
        }
    }

    #[tokio::test]
    async fn no_override_uses_exactly_the_default_prompt() {
        let client = HadidClient::new(RecordingBackend::succeeding());
        client
            .generate(GenerationRequest::new("some page"))
            .await
            .unwrap();

        let calls = client.backend().calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].system_prompt, DEFAULT_SYSTEM_PROMPT);
        assert_eq!(calls[0].content, "some page");
    }

    #[tokio::test]
    async fn empty_content_fails_before_backend_is_contacted() {
        let client = HadidClient::new(RecordingBackend::succeeding());
        for content in ["", "   ", "\n\t "] {
            let err = client
                .generate(GenerationRequest::new(content))
                .await
                .unwrap_err();
            assert!(matches!(err, HadidError::InvalidInput(_)));
        }
        assert_eq!(client.backend().call_count(), 0);
    }

    #[tokio::test]
    async fn unknown_named_prompt_fails_before_backend_is_contacted() {
        let client = HadidClient::new(RecordingBackend::succeeding());
        let err = client
            .generate(
                GenerationRequest::new("page")
                    .with_system_prompt(SystemPrompt::Named("nope".into())),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, HadidError::UnknownPrompt { name } if name == "nope"));
        assert_eq!(client.backend().call_count(), 0);
    }

    #[tokio::test]
    async fn inline_override_is_forwarded_verbatim_even_when_empty() {
        let client = HadidClient::new(RecordingBackend::succeeding());
        client
            .generate(
                GenerationRequest::new("page")
                    .with_system_prompt(SystemPrompt::Inline(String::new())),
            )
            .await
            .unwrap();

        let calls = client.backend().calls.lock().unwrap();
        assert_eq!(calls[0].system_prompt, "");
    }

    #[tokio::test]
    async fn backend_failure_surfaces_with_provenance() {
        let client = HadidClient::new(RecordingBackend::failing("quota exceeded"));
        let err = client
            .generate(GenerationRequest::new("page"))
            .await
            .unwrap_err();

        match err {
            HadidError::Backend { prompt, source, .. } => {
                assert_eq!(prompt, DEFAULT_PROMPT_NAME);
                assert_eq!(source.to_string(), "quota exceeded");
            }
            other => panic!("expected backend error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn options_are_forwarded_opaquely() {
        let client = HadidClient::new(RecordingBackend::succeeding());
        client
            .generate(
                GenerationRequest::new("page").with_options(
                    GenerationOptions::default()
                        .with_max_tokens(512)
                        .with_temperature(0.2),
                ),
            )
            .await
            .unwrap();

        let calls = client.backend().calls.lock().unwrap();
        assert_eq!(calls[0].options.max_tokens, Some(512));
        assert_eq!(calls[0].options.temperature, Some(0.2));
    }
}

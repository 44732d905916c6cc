//! Tests for two-stage prompt composition.

use async_trait::async_trait;
use std::sync::Arc;
use storyreel_core::{TextRequest, PROMPT_FIELD_LABELS};
use storyreel_error::{ModelsError, ModelsErrorKind, StoryreelResult};
use storyreel_interface::TextGenerator;
use storyreel_pipeline::PromptComposer;

/// Text generator returning a canned reply, an empty string, or an error.
struct FakeTextGenerator {
    reply: Result<String, ()>,
}

#[async_trait]
impl TextGenerator for FakeTextGenerator {
    async fn generate(&self, _request: &TextRequest) -> StoryreelResult<String> {
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(()) => Err(ModelsError::new(ModelsErrorKind::EmptyResponse).into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }

    fn model_name(&self) -> &str {
        "fake-model"
    }
}

#[tokio::test]
async fn successful_enhancement_is_used_verbatim() {
    let driver = Arc::new(FakeTextGenerator {
        reply: Ok("Subject: a keeper\nAction: lights the lamp".to_string()),
    });
    let composer = PromptComposer::new(driver);

    let prompt = composer.compose("story text").await;
    assert_eq!(prompt, "Subject: a keeper\nAction: lights the lamp");
}

#[tokio::test]
async fn empty_reply_falls_back_to_template_with_all_field_labels() {
    let driver = Arc::new(FakeTextGenerator {
        reply: Ok("   ".to_string()),
    });
    let composer = PromptComposer::new(driver);

    let prompt = composer.compose("A keeper lights the lamp.").await;
    assert!(!prompt.trim().is_empty());
    for label in PROMPT_FIELD_LABELS {
        assert!(prompt.contains(label), "missing field label {label}");
    }
    assert!(prompt.contains("A keeper lights the lamp."));
}

#[tokio::test]
async fn transport_failure_falls_back_to_template() {
    let driver = Arc::new(FakeTextGenerator { reply: Err(()) });
    let composer = PromptComposer::new(driver);

    let prompt = composer.compose("story text").await;
    for label in PROMPT_FIELD_LABELS {
        assert!(prompt.contains(label), "missing field label {label}");
    }
}

#[tokio::test]
async fn template_only_composer_never_needs_a_service() {
    let composer = PromptComposer::template_only();

    let prompt = composer.compose("story text").await;
    for label in PROMPT_FIELD_LABELS {
        assert!(prompt.contains(label), "missing field label {label}");
    }
    assert!(prompt.contains("16:9"));
}

#[tokio::test]
async fn fallback_truncates_long_stories() {
    let composer = PromptComposer::template_only();
    let long_story = "x".repeat(5000);

    let prompt = composer.compose(&long_story).await;
    assert!(prompt.len() < 2000, "fallback prompt should be bounded");
}

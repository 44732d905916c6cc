//! Tests for AI-assisted story polishing.

use async_trait::async_trait;
use storyreel_core::TextRequest;
use storyreel_error::{ModelsError, ModelsErrorKind, StoryreelResult};
use storyreel_interface::TextGenerator;
use storyreel_pipeline::polish_text;

struct FakeEditor {
    reply: Result<String, ()>,
}

#[async_trait]
impl TextGenerator for FakeEditor {
    async fn generate(&self, request: &TextRequest) -> StoryreelResult<String> {
        assert!(request.system.contains("story editor"));
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(()) => Err(ModelsError::new(ModelsErrorKind::Http("timeout".into())).into()),
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
async fn polished_text_is_returned() {
    let editor = FakeEditor {
        reply: Ok("A sharper, brighter story.".to_string()),
    };
    let polished = polish_text(&editor, "a dull story").await;
    assert_eq!(polished, "A sharper, brighter story.");
}

#[tokio::test]
async fn service_failure_returns_original_text() {
    let editor = FakeEditor { reply: Err(()) };
    let polished = polish_text(&editor, "a dull story").await;
    assert_eq!(polished, "a dull story");
}

#[tokio::test]
async fn empty_reply_returns_original_text() {
    let editor = FakeEditor {
        reply: Ok("  \n ".to_string()),
    };
    let polished = polish_text(&editor, "a dull story").await;
    assert_eq!(polished, "a dull story");
}

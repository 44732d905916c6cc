//! AI-assisted story polishing.

use storyreel_core::TextRequest;
use storyreel_interface::TextGenerator;
use tracing::warn;

/// Fixed system instruction for the story editor persona.
pub const POLISH_SYSTEM_INSTRUCTION: &str = "\
You are a professional story editor. Your task:
1. Tighten the language and make it more vivid and fluent
2. Strengthen emotional rendering and detail
3. Preserve the story's core plot and voice
4. Stay within 1.5x the original length
Reply with the polished story only.";

const POLISH_TEMPERATURE: f32 = 0.7;
const POLISH_MAX_TOKENS: u32 = 1000;

/// Polish story text through the text-generation service.
///
/// Recovery is local: any transport failure or empty reply returns the
/// original content unchanged, so the caller never sees an error.
#[tracing::instrument(skip(driver, content), fields(content_len = content.len()))]
pub async fn polish_text<X>(driver: &X, content: &str) -> String
where
    X: TextGenerator + ?Sized,
{
    let request = TextRequest {
        system: POLISH_SYSTEM_INSTRUCTION.to_string(),
        content: content.to_string(),
        temperature: Some(POLISH_TEMPERATURE),
        max_tokens: Some(POLISH_MAX_TOKENS),
    };

    match driver.generate(&request).await {
        Ok(polished) if !polished.trim().is_empty() => polished,
        Ok(_) => {
            warn!("Polish service returned empty text, keeping original");
            content.to_string()
        }
        Err(e) => {
            warn!(error = %e, "Polish failed, keeping original");
            content.to_string()
        }
    }
}

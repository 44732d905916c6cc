//! Two-stage cinematic prompt composition.

use std::sync::Arc;
use storyreel_core::{CinematicPrompt, TextRequest};
use storyreel_interface::TextGenerator;
use tracing::{debug, warn};

/// Fixed system instruction for Stage 1 prompt enhancement.
///
/// Describes the seven-field cinematic schema the reply must instantiate,
/// plus the technical constraints carried by every generation request.
pub const ENHANCE_SYSTEM_INSTRUCTION: &str = "\
You are a cinematography prompt writer for a text-to-video model. \
Rewrite the story you are given as a single generation prompt with exactly \
these seven labeled fields, each on its own line:

Subject: who or what the shot centers on
Action: what happens on screen
Style: overall visual style
Camera: camera movement and framing
Composition: shot composition
Focus/Lens: focus and lens treatment
Atmosphere: mood and lighting

Close with these fixed technical requirements: duration 5-10 seconds, \
aspect ratio 16:9, photorealistic 4K quality, ambient sound design. \
Reply with the prompt text only.";

const ENHANCE_TEMPERATURE: f32 = 0.7;
const ENHANCE_MAX_TOKENS: u32 = 800;

/// Composes video generation prompts from aggregated story text.
///
/// Stage 1 asks the text-generation service to rewrite the story into the
/// structured schema; Stage 2 is a deterministic template needing no
/// external dependency. Any Stage 1 failure — transport error, empty or
/// whitespace-only reply — falls through to Stage 2 silently, so
/// composition always yields a usable prompt.
#[derive(Clone)]
pub struct PromptComposer {
    driver: Option<Arc<dyn TextGenerator>>,
}

impl PromptComposer {
    /// Composer with Stage 1 enhancement backed by `driver`.
    pub fn new(driver: Arc<dyn TextGenerator>) -> Self {
        Self {
            driver: Some(driver),
        }
    }

    /// Composer without an enhancement service; always uses the template.
    pub fn template_only() -> Self {
        Self { driver: None }
    }

    /// Compose a generation prompt for the aggregated story text.
    #[tracing::instrument(skip(self, full_content), fields(content_len = full_content.len()))]
    pub async fn compose(&self, full_content: &str) -> String {
        if let Some(driver) = &self.driver {
            let request = TextRequest {
                system: ENHANCE_SYSTEM_INSTRUCTION.to_string(),
                content: full_content.to_string(),
                temperature: Some(ENHANCE_TEMPERATURE),
                max_tokens: Some(ENHANCE_MAX_TOKENS),
            };

            match driver.generate(&request).await {
                Ok(text) if !text.trim().is_empty() => {
                    debug!(provider = driver.provider_name(), "Using enhanced prompt");
                    return text;
                }
                Ok(_) => {
                    warn!("Enhancement service returned empty prompt, using template");
                }
                Err(e) => {
                    warn!(error = %e, "Prompt enhancement failed, using template");
                }
            }
        }

        CinematicPrompt::from_excerpt(full_content).render()
    }
}

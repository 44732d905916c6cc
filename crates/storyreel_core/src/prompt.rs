//! Cinematic prompt structure for video generation.

use serde::{Deserialize, Serialize};

/// Maximum number of characters of story text carried into the fallback
/// prompt. Truncation respects char boundaries.
pub const EXCERPT_MAX_CHARS: usize = 300;

/// The seven structural field labels of a cinematic prompt, in render order.
pub const PROMPT_FIELD_LABELS: [&str; 7] = [
    "Subject",
    "Action",
    "Style",
    "Camera",
    "Composition",
    "Focus/Lens",
    "Atmosphere",
];

/// Fixed technical constraints appended to every rendered prompt.
const TECHNICAL_CONSTRAINTS: &str = "\
Technical requirements:
- Duration: 5-10 seconds
- Aspect ratio: 16:9
- Photorealistic 4K quality
- Include ambient sound design";

/// A structured seven-field cinematic prompt.
///
/// The video generation service receives a flat prompt string; this type
/// guarantees the string always instantiates the same seven fields whether it
/// was produced by the enhancement service or by the deterministic fallback.
///
/// # Examples
///
/// ```
/// use storyreel_core::{CinematicPrompt, PROMPT_FIELD_LABELS};
///
/// let prompt = CinematicPrompt::from_excerpt("A lighthouse keeper finds a message in a bottle.");
/// let rendered = prompt.render();
/// for label in PROMPT_FIELD_LABELS {
///     assert!(rendered.contains(label), "missing field label {label}");
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CinematicPrompt {
    /// Who or what the shot centers on
    pub subject: String,
    /// What is happening on screen
    pub action: String,
    /// Overall visual style
    pub style: String,
    /// Camera movement and framing
    pub camera: String,
    /// Shot composition
    pub composition: String,
    /// Focus and lens treatment
    pub focus: String,
    /// Mood and lighting atmosphere
    pub atmosphere: String,
}

impl CinematicPrompt {
    /// Build the deterministic fallback prompt from a bounded story excerpt.
    ///
    /// This is Stage 2 of prompt composition: it needs no external service
    /// and always yields a usable prompt. The excerpt is truncated to
    /// [`EXCERPT_MAX_CHARS`] characters.
    pub fn from_excerpt(full_content: &str) -> Self {
        let excerpt = truncate_chars(full_content.trim(), EXCERPT_MAX_CHARS);
        Self {
            subject: format!("Key characters and moments from this story: {excerpt}"),
            action: "Show the pivotal emotional moments of the narrative".to_string(),
            style: "Cinematic, photorealistic, natural color grading".to_string(),
            camera: "Slow dolly-in with a steady establishing shot".to_string(),
            composition: "Rule-of-thirds framing with dramatic lighting contrast".to_string(),
            focus: "Shallow depth of field, 35mm lens look".to_string(),
            atmosphere: "Emotional, atmospheric, professional cinematography".to_string(),
        }
    }

    /// Render the prompt to the flat string sent to the video service.
    pub fn render(&self) -> String {
        format!(
            "Create a cinematic short film.\n\n\
             Subject: {}\n\
             Action: {}\n\
             Style: {}\n\
             Camera: {}\n\
             Composition: {}\n\
             Focus/Lens: {}\n\
             Atmosphere: {}\n\n\
             {}",
            self.subject,
            self.action,
            self.style,
            self.camera,
            self.composition,
            self.focus,
            self.atmosphere,
            TECHNICAL_CONSTRAINTS,
        )
    }
}

/// Truncate to at most `max` chars without splitting a char boundary.
fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

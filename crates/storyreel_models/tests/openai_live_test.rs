#![cfg(feature = "openai")]

// Integration test: live text generation through the OpenAI API.
//
// Consumes quota, so it only runs with the `api` marker feature enabled and
// OPENAI_API_KEY set.

use storyreel_core::TextRequest;
use storyreel_interface::TextGenerator;
use storyreel_models::OpenAiClient;

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)] // Requires OPENAI_API_KEY
async fn live_generate_returns_non_empty_text() {
    let _ = dotenvy::dotenv();

    let client = OpenAiClient::from_env().expect("Failed to create client");

    let request = TextRequest {
        system: "You are a terse assistant.".to_string(),
        content: "Reply with the single word: ready".to_string(),
        temperature: Some(0.0),
        max_tokens: Some(10),
    };

    let text = client.generate(&request).await.expect("generation failed");
    assert!(!text.trim().is_empty());
}

use crate::{ChatMessage, ChatRequest, ChatResponse};
use async_trait::async_trait;
use reqwest::Client;
use storyreel_core::TextRequest;
use storyreel_error::{ModelsError, ModelsErrorKind, StoryreelResult};
use storyreel_interface::TextGenerator;
use tracing::{debug, error, instrument};

const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// OpenAI chat completions client.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    model: String,
}

impl OpenAiClient {
    /// Creates a new OpenAI client.
    ///
    /// # Arguments
    ///
    /// * `api_key` - OpenAI API key
    /// * `model` - Model identifier (e.g., "gpt-4o-mini")
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        let api_key = api_key.into();
        let model = model.into();
        debug!("Creating new OpenAI client");
        Self {
            client: Client::new(),
            api_key,
            model,
        }
    }

    /// Create a client from environment variables.
    ///
    /// Reads:
    /// - `OPENAI_API_KEY` (required)
    /// - `OPENAI_MODEL` (default: "gpt-4o-mini")
    pub fn from_env() -> Result<Self, ModelsError> {
        let api_key = std::env::var("OPENAI_API_KEY").map_err(|_| {
            ModelsError::new(ModelsErrorKind::Configuration(
                "OPENAI_API_KEY not set".to_string(),
            ))
        })?;
        let model =
            std::env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Ok(Self::new(api_key, model))
    }

    /// Sends a request to the chat completions endpoint.
    #[instrument(skip(self, request), fields(model = %request.model))]
    async fn generate_chat(&self, request: &ChatRequest) -> Result<ChatResponse, ModelsError> {
        debug!("Sending request to OpenAI API");

        let response = self
            .client
            .post(OPENAI_API_URL)
            .bearer_auth(&self.api_key)
            .header("content-type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send request to OpenAI API");
                ModelsError::new(ModelsErrorKind::Http(format!("Request failed: {}", e)))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "OpenAI API returned error");
            return Err(ModelsError::new(ModelsErrorKind::ApiError {
                status: status.as_u16(),
                message: body,
            }));
        }

        let chat_response: ChatResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse OpenAI response");
            ModelsError::new(ModelsErrorKind::Parse(format!(
                "Failed to parse response: {}",
                e
            )))
        })?;

        debug!(
            choices = chat_response.choices.len(),
            "Received response from OpenAI"
        );
        Ok(chat_response)
    }

    /// Converts a TextRequest to the chat completions wire format.
    fn convert_request(&self, request: &TextRequest) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: request.system.clone(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: request.content.clone(),
                },
            ],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        }
    }
}

#[async_trait]
impl TextGenerator for OpenAiClient {
    #[instrument(skip(self, request))]
    async fn generate(&self, request: &TextRequest) -> StoryreelResult<String> {
        debug!("Generating text with OpenAI");

        let chat_request = self.convert_request(request);
        let chat_response = self.generate_chat(&chat_request).await?;

        let text = chat_response
            .choices
            .first()
            .map(|choice| choice.message.content.trim().to_string())
            .unwrap_or_default();

        if text.is_empty() {
            return Err(ModelsError::new(ModelsErrorKind::EmptyResponse).into());
        }

        Ok(text)
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

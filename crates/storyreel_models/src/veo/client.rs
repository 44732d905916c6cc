use crate::{Operation, PredictInstance, PredictRequest};
use async_trait::async_trait;
use reqwest::Client;
use storyreel_core::{VideoJobHandle, VideoResult};
use storyreel_error::{ModelsError, ModelsErrorKind, StoryreelResult};
use storyreel_interface::VideoGenerator;
use tracing::{debug, error, instrument};

const VEO_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "veo-3.1-generate-preview";

/// Google Veo video generation client.
///
/// Veo only exposes poll-based completion through the long-running
/// operations API: submission returns an operation name, and the operation
/// must be re-fetched until its `done` flag flips.
#[derive(Debug, Clone)]
pub struct VeoClient {
    client: Client,
    api_key: String,
    model: String,
}

impl VeoClient {
    /// Creates a new Veo client.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Google API key
    /// * `model` - Model identifier (e.g., "veo-3.1-generate-preview")
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        let api_key = api_key.into();
        let model = model.into();
        debug!("Creating new Veo client");
        Self {
            client: Client::new(),
            api_key,
            model,
        }
    }

    /// Create a client from environment variables.
    ///
    /// Reads:
    /// - `GOOGLE_API_KEY` (required)
    /// - `VEO_MODEL` (default: "veo-3.1-generate-preview")
    pub fn from_env() -> Result<Self, ModelsError> {
        let api_key = std::env::var("GOOGLE_API_KEY").map_err(|_| {
            ModelsError::new(ModelsErrorKind::Configuration(
                "GOOGLE_API_KEY not set".to_string(),
            ))
        })?;
        let model = std::env::var("VEO_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Ok(Self::new(api_key, model))
    }

    /// Convert an operation into the interface's job handle.
    fn convert_operation(operation: Operation) -> VideoJobHandle {
        let error = operation.error.map(|e| match e.code {
            Some(code) => format!("{} (code {})", e.message, code),
            None => e.message,
        });

        let results = operation
            .response
            .and_then(|r| r.generate_video_response)
            .map(|r| {
                r.generated_samples
                    .into_iter()
                    .filter_map(|sample| sample.video.and_then(|v| v.uri))
                    .map(|uri| VideoResult { uri })
                    .collect()
            })
            .unwrap_or_default();

        VideoJobHandle {
            id: operation.name,
            done: operation.done,
            error,
            results,
        }
    }

    /// Parse an operation response body, mapping transport and decode
    /// failures to `ModelsError`.
    async fn read_operation(
        response: reqwest::Response,
        context: &str,
    ) -> Result<Operation, ModelsError> {
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Veo API returned error during {}", context);
            return Err(ModelsError::new(ModelsErrorKind::ApiError {
                status: status.as_u16(),
                message: body,
            }));
        }

        response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse Veo operation");
            ModelsError::new(ModelsErrorKind::Parse(format!(
                "Failed to parse operation: {}",
                e
            )))
        })
    }
}

#[async_trait]
impl VideoGenerator for VeoClient {
    #[instrument(skip(self, prompt), fields(model = %self.model, prompt_len = prompt.len()))]
    async fn submit(&self, prompt: &str) -> StoryreelResult<VideoJobHandle> {
        debug!("Submitting video generation job to Veo");

        let request = PredictRequest {
            instances: vec![PredictInstance {
                prompt: prompt.to_string(),
            }],
        };

        let url = format!("{}/models/{}:predictLongRunning", VEO_API_BASE, self.model);
        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to submit video job");
                ModelsError::new(ModelsErrorKind::Http(format!("Submit failed: {}", e)))
            })?;

        let operation = Self::read_operation(response, "submit").await?;
        debug!(operation = %operation.name, "Video job submitted");
        Ok(Self::convert_operation(operation))
    }

    #[instrument(skip(self, handle), fields(operation = %handle.id))]
    async fn poll(&self, handle: &VideoJobHandle) -> StoryreelResult<VideoJobHandle> {
        let url = format!("{}/{}", VEO_API_BASE, handle.id);
        let response = self
            .client
            .get(&url)
            .header("x-goog-api-key", &self.api_key)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to poll video job");
                ModelsError::new(ModelsErrorKind::Http(format!("Poll failed: {}", e)))
            })?;

        let operation = Self::read_operation(response, "poll").await?;
        debug!(done = operation.done, "Polled video job");
        Ok(Self::convert_operation(operation))
    }

    #[instrument(skip(self, result))]
    async fn download(&self, result: &VideoResult) -> StoryreelResult<Vec<u8>> {
        debug!(uri = %result.uri, "Downloading generated video");

        let response = self
            .client
            .get(&result.uri)
            .header("x-goog-api-key", &self.api_key)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to download video");
                ModelsError::new(ModelsErrorKind::Http(format!("Download failed: {}", e)))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(ModelsError::new(ModelsErrorKind::ApiError {
                status: status.as_u16(),
                message: "video download failed".to_string(),
            })
            .into());
        }

        let bytes = response.bytes().await.map_err(|e| {
            ModelsError::new(ModelsErrorKind::Http(format!(
                "Failed to read video bytes: {}",
                e
            )))
        })?;

        debug!(size = bytes.len(), "Downloaded video artifact");
        Ok(bytes.to_vec())
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

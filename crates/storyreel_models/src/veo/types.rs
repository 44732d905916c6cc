//! Wire types for the Veo long-running operations API.

use serde::{Deserialize, Serialize};

/// Request body for `POST /models/{model}:predictLongRunning`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PredictRequest {
    /// Generation instances; one per prompt
    pub instances: Vec<PredictInstance>,
}

/// A single generation instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PredictInstance {
    /// The composed cinematic prompt
    pub prompt: String,
}

/// A long-running operation as returned by submission and polling.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Operation {
    /// Service-assigned operation name; the opaque job id
    pub name: String,
    /// Whether the operation has finished (absent means still running)
    #[serde(default)]
    pub done: bool,
    /// Error payload, set when the operation failed
    #[serde(default)]
    pub error: Option<OperationError>,
    /// Result payload, set when the operation completed
    #[serde(default)]
    pub response: Option<OperationResult>,
}

/// Error payload of a failed operation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OperationError {
    /// Service error code
    #[serde(default)]
    pub code: Option<i32>,
    /// Human-readable error message
    #[serde(default)]
    pub message: String,
}

/// Result payload of a completed operation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OperationResult {
    /// The video generation result envelope
    #[serde(default, rename = "generateVideoResponse")]
    pub generate_video_response: Option<GenerateVideoResponse>,
}

/// Envelope holding the generated samples.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GenerateVideoResponse {
    /// Generated videos; empty when the service produced nothing usable
    #[serde(default, rename = "generatedSamples")]
    pub generated_samples: Vec<GeneratedSample>,
}

/// A single generated sample.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeneratedSample {
    /// The video file reference
    #[serde(default)]
    pub video: Option<VideoFile>,
}

/// A downloadable video file reference.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VideoFile {
    /// Download uri for the raw media bytes
    #[serde(default)]
    pub uri: Option<String>,
}

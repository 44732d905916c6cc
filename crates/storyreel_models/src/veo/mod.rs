//! Google Veo long-running video generation client.

mod client;
mod types;

pub use client::VeoClient;
pub use types::{
    GeneratedSample, GenerateVideoResponse, Operation, OperationError, OperationResult,
    PredictInstance, PredictRequest, VideoFile,
};

//! Storyreel - collaborative storytelling with AI video generation
//!
//! Storyreel is a small web service where users submit short stories, other
//! users fork them or append continuations up to a configured contributor
//! cap, and an original author can trigger AI-assisted text polishing and AI
//! video generation summarizing the whole thread.
//!
//! # Architecture
//!
//! Storyreel is organized as a workspace with focused crates:
//!
//! - `storyreel_core` - Core data types (Story, VideoStatus, prompts, jobs)
//! - `storyreel_interface` - Trait seams (repository, generators, poll timer)
//! - `storyreel_error` - Error types
//! - `storyreel_models` - OpenAI and Veo provider clients
//! - `storyreel_storage` - Filesystem video artifact store
//! - `storyreel_database` - PostgreSQL story store
//! - `storyreel_pipeline` - Aggregation, prompt composition, and the video
//!   job lifecycle
//! - `storyreel_server` - axum HTTP API
//!
//! This crate (`storyreel`) re-exports everything for convenience and ships
//! the server binary.

#![forbid(unsafe_code)]

pub use storyreel_core::{
    CinematicPrompt, JobOutcome, NewStory, Story, StoryThread, TextRequest, VideoJobHandle,
    VideoResult, VideoStatus,
};
pub use storyreel_database::{establish_pool, run_migrations, DatabaseStoryRepository};
pub use storyreel_error::{StoryreelError, StoryreelErrorKind, StoryreelResult};
pub use storyreel_interface::{
    PollTimer, StoryFilter, StoryRepository, StorySort, TextGenerator, VideoGenerator,
};
pub use storyreel_models::{OpenAiClient, VeoClient};
pub use storyreel_pipeline::{
    aggregate, polish_text, InMemoryStoryRepository, IntervalTimer, PromptComposer,
    StatusProjector, VideoJobRunner, VideoPipeline,
};
pub use storyreel_server::{router, serve, AppState, ServerConfig};
pub use storyreel_storage::VideoStore;

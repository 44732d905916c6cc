//! Core data types for the Storyreel service.
//!
//! This crate provides the foundation data types shared across the Storyreel
//! workspace: story records, video lifecycle states, generation requests, and
//! the cinematic prompt structure.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod job;
mod prompt;
mod request;
mod status;
mod story;

pub use job::{JobOutcome, VideoJobHandle, VideoResult};
pub use prompt::{CinematicPrompt, EXCERPT_MAX_CHARS, PROMPT_FIELD_LABELS};
pub use request::TextRequest;
pub use status::VideoStatus;
pub use story::{NewStory, Story, StoryThread};

//! HTTP API server for Storyreel.
//!
//! Exposes the story CRUD surface, fork/contribution operations, AI text
//! polishing, and the video generation trigger. The triggering request
//! returns immediately after the synchronous claim; the pipeline finishes on
//! a spawned background task, and clients observe progress by re-fetching
//! the story's `video_status`.
//!
//! Generated videos are served statically under `/videos` from the
//! configured media root.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod handlers;
mod routes;
mod server;
mod state;

pub use config::ServerConfig;
pub use error::ApiError;
pub use routes::router;
pub use server::serve;
pub use state::AppState;

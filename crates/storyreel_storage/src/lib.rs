//! Filesystem storage for generated video artifacts.
//!
//! Generated videos are exposed to clients as relative paths under the fixed
//! public `/videos` prefix; the backing files live in a media root served by
//! the same process. Filenames embed the owning story id and a generation
//! timestamp so concurrent or repeated jobs for the same story never
//! overwrite each other.
//!
//! A placeholder artifact is provisioned at process start so the job
//! runner's fallback path always resolves.
//!
//! # Example
//!
//! ```no_run
//! use storyreel_storage::VideoStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = VideoStore::new("./media/videos")?;
//! store.provision_placeholder().await?;
//!
//! let url = store.store(42, &[0u8; 1024]).await?;
//! assert!(url.starts_with("/videos/story_42_"));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod store;

pub use store::{VideoStore, PLACEHOLDER_FILENAME, PUBLIC_VIDEO_PREFIX};
pub use storyreel_error::{StorageError, StorageErrorKind};

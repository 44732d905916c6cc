//! Video artifact store implementation.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use storyreel_error::{StorageError, StorageErrorKind, StoryreelResult};

/// Public url prefix under which stored artifacts are served.
pub const PUBLIC_VIDEO_PREFIX: &str = "/videos";

/// Filename of the pre-provisioned fallback artifact.
pub const PLACEHOLDER_FILENAME: &str = "placeholder.mp4";

/// A minimal valid MP4 container (ftyp + free boxes). Written as the
/// placeholder so the fallback url always resolves to playable bytes.
const PLACEHOLDER_MP4: [u8; 36] = [
    0x00, 0x00, 0x00, 0x20, 0x66, 0x74, 0x79, 0x70, 0x69, 0x73, 0x6F, 0x6D, 0x00, 0x00, 0x02,
    0x00, 0x69, 0x73, 0x6F, 0x6D, 0x69, 0x73, 0x6F, 0x32, 0x6D, 0x70, 0x34, 0x31, 0x00, 0x00,
    0x00, 0x08, 0x66, 0x72, 0x65, 0x65,
];

/// Filesystem store for generated videos.
///
/// Writes are atomic: bytes land in a temp file first and are renamed into
/// place, so a crashed download never leaves a half-written artifact behind
/// the public prefix.
#[derive(Debug, Clone)]
pub struct VideoStore {
    media_root: PathBuf,
}

impl VideoStore {
    /// Create a new store rooted at `media_root`.
    ///
    /// Creates the directory if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or accessed.
    #[tracing::instrument(skip(media_root))]
    pub fn new(media_root: impl Into<PathBuf>) -> StoryreelResult<Self> {
        let media_root = media_root.into();

        std::fs::create_dir_all(&media_root).map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                media_root.display(),
                e
            )))
        })?;

        tracing::info!(path = %media_root.display(), "Created video store");
        Ok(Self { media_root })
    }

    /// The media root directory backing the public prefix.
    pub fn media_root(&self) -> &Path {
        &self.media_root
    }

    /// Write the placeholder artifact if it doesn't already exist.
    ///
    /// Called once at process start; the job runner's fallback path assumes
    /// this file is always present.
    #[tracing::instrument(skip(self))]
    pub async fn provision_placeholder(&self) -> StoryreelResult<()> {
        let path = self.media_root.join(PLACEHOLDER_FILENAME);
        if tokio::fs::try_exists(&path).await.unwrap_or(false) {
            tracing::debug!(path = %path.display(), "Placeholder already provisioned");
            return Ok(());
        }

        self.write_atomic(&path, &PLACEHOLDER_MP4).await?;
        tracing::info!(path = %path.display(), "Provisioned placeholder video");
        Ok(())
    }

    /// Public url of the placeholder artifact.
    pub fn placeholder_url(&self) -> String {
        format!("{}/{}", PUBLIC_VIDEO_PREFIX, PLACEHOLDER_FILENAME)
    }

    /// Store a generated artifact for `story_id`, returning its public url.
    ///
    /// The filename embeds the story id and the current unix timestamp, so
    /// repeated jobs for the same story produce distinct files.
    #[tracing::instrument(skip(self, data), fields(size = data.len()))]
    pub async fn store(&self, story_id: i32, data: &[u8]) -> StoryreelResult<String> {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        let filename = format!("story_{}_{}.mp4", story_id, timestamp);
        let path = self.media_root.join(&filename);

        self.write_atomic(&path, data).await?;

        tracing::info!(path = %path.display(), "Stored video artifact");
        Ok(format!("{}/{}", PUBLIC_VIDEO_PREFIX, filename))
    }

    /// Write bytes via temp file + rename for atomicity.
    async fn write_atomic(&self, path: &Path, data: &[u8]) -> StoryreelResult<()> {
        let tmp_path = path.with_extension("tmp");

        tokio::fs::write(&tmp_path, data).await.map_err(|e| {
            StorageError::new(StorageErrorKind::Write(format!(
                "{}: {}",
                tmp_path.display(),
                e
            )))
        })?;

        tokio::fs::rename(&tmp_path, path).await.map_err(|e| {
            StorageError::new(StorageErrorKind::Write(format!(
                "{}: {}",
                path.display(),
                e
            )))
        })?;

        Ok(())
    }
}

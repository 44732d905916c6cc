//! Server composition root and lifecycle.

use crate::{router, AppState, ServerConfig};
use std::sync::Arc;
use storyreel_database::{establish_pool, run_migrations, DatabaseStoryRepository};
use storyreel_error::{ServerError, ServerErrorKind, StoryreelResult};
use storyreel_interface::{StoryRepository, TextGenerator, VideoGenerator};
use storyreel_models::{OpenAiClient, VeoClient};
use storyreel_pipeline::{IntervalTimer, PromptComposer, VideoJobRunner, VideoPipeline};
use storyreel_storage::VideoStore;
use tracing::{info, warn};

/// Construct every service from the environment and serve requests.
///
/// The database and the video backend are required; the text backend is
/// optional — without it, polishing returns text unchanged and prompt
/// composition goes straight to the deterministic template.
pub async fn serve(config: ServerConfig) -> StoryreelResult<()> {
    let pool = establish_pool()?;
    run_migrations(&pool)?;
    let repo: Arc<dyn StoryRepository> = Arc::new(DatabaseStoryRepository::new(pool));

    let store = VideoStore::new(&config.media_root)?;
    store.provision_placeholder().await?;

    let text: Option<Arc<dyn TextGenerator>> = match OpenAiClient::from_env() {
        Ok(client) => Some(Arc::new(client)),
        Err(e) => {
            warn!(error = %e, "No text backend configured, polish and enhancement disabled");
            None
        }
    };

    let video: Arc<dyn VideoGenerator> = Arc::new(VeoClient::from_env()?);

    let composer = match &text {
        Some(driver) => PromptComposer::new(driver.clone()),
        None => PromptComposer::template_only(),
    };
    let runner = VideoJobRunner::new(video, store.clone(), Arc::new(IntervalTimer));
    let pipeline = Arc::new(VideoPipeline::new(
        repo.clone(),
        composer,
        runner,
        store.clone(),
    ));

    let state = AppState::new(repo, text, pipeline, store);
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&config.addr)
        .await
        .map_err(|e| {
            ServerError::new(ServerErrorKind::Bind {
                addr: config.addr.clone(),
                message: e.to_string(),
            })
        })?;

    info!(addr = %config.addr, "Storyreel API listening");
    axum::serve(listener, app)
        .await
        .map_err(|e| ServerError::new(ServerErrorKind::Serve(e.to_string())))?;

    Ok(())
}

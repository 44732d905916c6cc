//! Route table.

use crate::handlers;
use crate::state::AppState;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Build the application router.
///
/// Generated videos are served from the media root under the public
/// `/videos` prefix; the handlers only ever hand out paths below it.
pub fn router(state: AppState) -> Router {
    let media_root = state.store.media_root().to_path_buf();

    Router::new()
        .route("/", get(handlers::root))
        .route(
            "/api/stories",
            post(handlers::create_story).get(handlers::list_stories),
        )
        .route("/api/stories/:id", get(handlers::get_story))
        .route("/api/stories/:id/can-fork", get(handlers::can_fork))
        .route("/api/stories/:id/full-content", get(handlers::full_content))
        .route("/api/stories/:id/origin", get(handlers::origin))
        .route("/api/stories/:id/fork", post(handlers::fork_story))
        .route(
            "/api/stories/:id/generate-video",
            post(handlers::generate_video),
        )
        .route(
            "/api/stories/:id/regenerate",
            post(handlers::regenerate_video),
        )
        .route("/api/polish", post(handlers::polish))
        .nest_service("/videos", ServeDir::new(media_root))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

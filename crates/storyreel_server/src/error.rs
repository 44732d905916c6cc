//! API error mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use storyreel_error::{StoryErrorKind, StoryreelError, StoryreelErrorKind};

/// Wrapper mapping domain errors onto HTTP responses.
///
/// Validation errors map to 400, missing records to 404, authorization
/// failures to 403, and an in-flight duplicate generation request to 409.
/// Everything else is a 500 with a generic body; the specifics stay in logs.
#[derive(Debug)]
pub struct ApiError(pub StoryreelError);

impl From<StoryreelError> for ApiError {
    fn from(err: StoryreelError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self.0.kind() {
            StoryreelErrorKind::Story(e) => (status_for(&e.kind), e.kind.to_string()),
            _ => {
                tracing::error!(error = %self.0, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

fn status_for(kind: &StoryErrorKind) -> StatusCode {
    match kind {
        StoryErrorKind::EmptyTitle
        | StoryErrorKind::EmptyAuthor
        | StoryErrorKind::EmptyContent
        | StoryErrorKind::ContributorCapOutOfRange
        | StoryErrorKind::ContributorCapReached(_)
        | StoryErrorKind::SelfFork
        | StoryErrorKind::AlreadyForked
        | StoryErrorKind::NotAnOriginal => StatusCode::BAD_REQUEST,
        StoryErrorKind::ParentNotFound | StoryErrorKind::StoryNotFound(_) => {
            StatusCode::NOT_FOUND
        }
        StoryErrorKind::NotTheAuthor => StatusCode::FORBIDDEN,
        StoryErrorKind::AlreadyGenerating => StatusCode::CONFLICT,
    }
}

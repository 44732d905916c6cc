//! Contribution aggregation.

use storyreel_core::StoryThread;
use storyreel_error::StoryreelResult;
use storyreel_interface::StoryRepository;

/// Aggregate a root story with its ordered contributions.
///
/// Fetches the root plus all contributions ordered by creation time
/// ascending (ties by id ascending) and concatenates their contents with
/// blank-line separators. Read-only and deterministic: an unchanged tree
/// always yields byte-identical `full_content`, so the prompt pipeline sees
/// the same text on retries.
#[tracing::instrument(skip(repo))]
pub async fn aggregate<R>(repo: &R, root_id: i32) -> StoryreelResult<StoryThread>
where
    R: StoryRepository + ?Sized,
{
    let story = repo.get(root_id).await?;
    let contributions = repo.contributions(root_id).await?;

    tracing::debug!(
        root_id,
        contributions = contributions.len(),
        "Aggregated story thread"
    );

    Ok(StoryThread::assemble(story, contributions))
}

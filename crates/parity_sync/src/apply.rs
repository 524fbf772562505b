//! Plan execution.

use tracing::info;

use crate::error::SyncResult;
use crate::plan::SyncAction;
use crate::tracker::{CloseReason, IssueTracker};

/// Apply planned actions through the tracker, in plan order.
///
/// Fail-fast: the first tracker error aborts the run. Planning is
/// idempotent, so a re-run after a partial apply converges without
/// duplicating issues.
pub async fn apply_sync(tracker: &dyn IssueTracker, actions: &[SyncAction], label: &str) -> SyncResult<()> {
    for action in actions {
        match action {
            SyncAction::CloseNotPlanned { number } => {
                info!("Closing issue #{}: resource is excluded", number);
                tracker.close_issue(*number, CloseReason::NotPlanned).await?;
            }
            SyncAction::CloseCompleted { number } => {
                info!("Closing issue #{}: resource is implemented", number);
                tracker.close_issue(*number, CloseReason::Completed).await?;
            }
            SyncAction::Update { number, body } => {
                info!("Refreshing status on issue #{}", number);
                tracker.update_body(*number, body).await?;
            }
            SyncAction::Create { title, body } => {
                info!("Creating issue: {}", title);
                tracker.create_issue(title, body, label).await?;
            }
        }
    }

    Ok(())
}

//! # parity_sync
//!
//! Tracking-issue synchronization for the provider parity audit.
//!
//! Given the current status report and the set of open tracking issues,
//! [`plan_sync`] decides which issues to close (not planned / completed)
//! and which gaps need an issue created or its body refreshed. The plan is
//! pure data; [`apply_sync`] executes it through the [`IssueTracker`]
//! trait, whose production implementation talks to the GitHub issues API.
//!
//! Issues are matched to resources by stripping a fixed title prefix and
//! comparing against the canonical resource name, which assumes titles are
//! never hand-edited out of the prefix convention.

pub mod apply;
pub mod error;
pub mod plan;
pub mod tracker;

pub use apply::apply_sync;
pub use error::{SyncError, SyncResult};
pub use plan::{plan_sync, SyncAction, TrackedIssue};
pub use tracker::{CloseReason, GitHubTracker, IssueTracker};

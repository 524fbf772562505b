//! Sync action planning.
//!
//! Planning is pure: it looks at the status report, the curated policy,
//! and the currently open tracking issues, and produces the disjoint set
//! of actions that brings the tracker in line. Re-planning against the
//! tracker state left by a previous run produces no duplicate creations,
//! so repeated runs converge.

use parity_core::{AliasPolicy, ResourceName, StatusEntry, StatusReport};

/// An open tracking issue, reduced to what planning needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedIssue {
    pub number: u64,
    pub title: String,
}

impl TrackedIssue {
    /// The resource this issue tracks, derived from its title.
    ///
    /// Titles that do not carry the prefix are not ours and never match.
    fn resource(&self, title_prefix: &str) -> Option<ResourceName> {
        self.title
            .strip_prefix(title_prefix)
            .map(ResourceName::normalize)
    }
}

/// A single tracker mutation decided by [`plan_sync`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncAction {
    /// The issue's resource is now in the exclusion set.
    CloseNotPlanned { number: u64 },
    /// The issue's resource now has both a resource and a datasource.
    CloseCompleted { number: u64 },
    /// The gap still exists; refresh the issue body with current status.
    Update { number: u64, body: String },
    /// A gap with no open issue yet.
    Create { title: String, body: String },
}

/// Decide the tracker mutations for the current audit.
pub fn plan_sync(
    report: &StatusReport,
    policy: &AliasPolicy,
    open_issues: &[TrackedIssue],
    title_prefix: &str,
) -> Vec<SyncAction> {
    let mut actions = Vec::new();

    // Close issues that no longer represent a gap: either the resource was
    // added to the exclusion list, or both sides are now implemented.
    for issue in open_issues {
        let Some(resource) = issue.resource(title_prefix) else {
            continue;
        };

        if policy.is_excluded(&resource) {
            actions.push(SyncAction::CloseNotPlanned {
                number: issue.number,
            });
        } else if report
            .get(&resource)
            .is_some_and(StatusEntry::is_fully_implemented)
        {
            actions.push(SyncAction::CloseCompleted {
                number: issue.number,
            });
        }
    }

    // Upsert an issue for every remaining gap.
    for entry in report.iter() {
        if entry.is_fully_implemented() {
            continue;
        }

        let body = status_body(entry);
        let existing = open_issues
            .iter()
            .find(|issue| issue.resource(title_prefix).as_ref() == Some(&entry.resource));

        match existing {
            Some(issue) => actions.push(SyncAction::Update {
                number: issue.number,
                body,
            }),
            None => actions.push(SyncAction::Create {
                title: format!("{}{}", title_prefix, entry.resource),
                body,
            }),
        }
    }

    actions
}

/// Compact key/value description of an entry's implementation status.
fn status_body(entry: &StatusEntry) -> String {
    format!(
        "Implementation Status: `{{\"resource\": {}, \"datasource\": {}}}`",
        entry.has_resource, entry.has_data_source
    )
}

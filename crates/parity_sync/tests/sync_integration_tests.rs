//! Integration tests for issue synchronization.

use std::collections::BTreeSet;
use std::sync::Mutex;

use async_trait::async_trait;
use parity_core::{AliasPolicy, Inventory, ParityEngine, ResourceName};
use parity_sync::{
    apply_sync, plan_sync, CloseReason, IssueTracker, SyncError, SyncResult, TrackedIssue,
};

const PREFIX: &str = "Feature Request: ";
const LABEL: &str = "parity-audit";

fn set(names: &[&str]) -> BTreeSet<ResourceName> {
    names.iter().map(|n| ResourceName::normalize(n)).collect()
}

/// Records every tracker call in order.
#[derive(Default)]
struct RecordingTracker {
    calls: Mutex<Vec<String>>,
    fail_on_close: bool,
}

impl RecordingTracker {
    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl IssueTracker for RecordingTracker {
    async fn list_open_issues(&self, label: &str) -> SyncResult<Vec<TrackedIssue>> {
        self.record(format!("list {label}"));
        Ok(Vec::new())
    }

    async fn create_issue(&self, title: &str, _body: &str, label: &str) -> SyncResult<()> {
        self.record(format!("create {label} {title}"));
        Ok(())
    }

    async fn close_issue(&self, number: u64, reason: CloseReason) -> SyncResult<()> {
        self.record(format!("close #{number} {}", reason.as_str()));
        if self.fail_on_close {
            return Err(SyncError::Status {
                status: 500,
                url: format!("issues/{number}"),
            });
        }
        Ok(())
    }

    async fn update_body(&self, number: u64, _body: &str) -> SyncResult<()> {
        self.record(format!("update #{number}"));
        Ok(())
    }
}

fn issue(number: u64, resource: &str) -> TrackedIssue {
    TrackedIssue {
        number,
        title: format!("{PREFIX}{resource}"),
    }
}

#[tokio::test]
async fn test_full_sync_pass_applies_all_action_kinds() {
    let policy = AliasPolicy::from_toml_str("exclude = [\"events\"]").unwrap();
    let inventory = Inventory {
        resources: set(&["automation", "artifact"]),
        data_sources: set(&["automation"]),
    };
    let report = ParityEngine::new(policy.clone()).compute(
        &set(&["automation", "artifact", "event", "webhook"]),
        &inventory,
    );

    let open_issues = vec![
        issue(1, "event"),      // excluded -> close not planned
        issue(2, "automation"), // both implemented -> close completed
        issue(3, "artifact"),   // still a gap -> body refresh
    ];

    let actions = plan_sync(&report, &policy, &open_issues, PREFIX);
    let tracker = RecordingTracker::default();
    apply_sync(&tracker, &actions, LABEL).await.unwrap();

    assert_eq!(
        tracker.calls(),
        vec![
            "close #1 not_planned",
            "close #2 completed",
            "update #3",
            "create parity-audit Feature Request: webhook",
        ]
    );
}

#[tokio::test]
async fn test_apply_is_fail_fast() {
    let policy = AliasPolicy::from_toml_str("exclude = [\"events\"]").unwrap();
    let report = ParityEngine::new(policy.clone()).compute(
        &set(&["artifact", "event"]),
        &Inventory::default(),
    );

    let open_issues = vec![issue(1, "event")];
    let actions = plan_sync(&report, &policy, &open_issues, PREFIX);

    let tracker = RecordingTracker {
        fail_on_close: true,
        ..Default::default()
    };
    let result = apply_sync(&tracker, &actions, LABEL).await;

    assert!(result.is_err());
    // The failing close is the first planned action; nothing after it ran.
    assert_eq!(tracker.calls(), vec!["close #1 not_planned"]);
}

#[tokio::test]
async fn test_second_run_converges_to_no_creations() {
    let policy = AliasPolicy::default();
    let report = ParityEngine::new(policy.clone()).compute(
        &set(&["artifact", "webhook"]),
        &Inventory::default(),
    );

    // State the tracker would hold after the first run.
    let open_issues = vec![issue(10, "artifact"), issue(11, "webhook")];

    let actions = plan_sync(&report, &policy, &open_issues, PREFIX);
    let tracker = RecordingTracker::default();
    apply_sync(&tracker, &actions, LABEL).await.unwrap();

    assert_eq!(tracker.calls(), vec!["update #10", "update #11"]);
}

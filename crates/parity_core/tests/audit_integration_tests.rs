//! Integration tests for the reconciliation engine.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use parity_core::{
    write_wiki_page, AliasPolicy, Inventory, ParityEngine, ResourceName, StatusEntry,
};
use tempfile::tempdir;

fn names(raw: &[&str]) -> BTreeSet<ResourceName> {
    raw.iter().map(|n| ResourceName::normalize(n)).collect()
}

const POLICY: &str = r#"
exclude = ["events", "logs", "ui"]

[aliases]
bots = ["service_account"]
block_documents = ["block"]
block_types = ["block"]
"#;

#[test]
fn test_audit_flow_from_curated_policy() {
    let policy = AliasPolicy::from_toml_str(POLICY).unwrap();
    let engine = ParityEngine::new(policy);

    // Tags as the OpenAPI document spells them.
    let cloud_tags = names(&[
        "Artifacts",
        "Automations",
        "Block Documents",
        "Block Types",
        "Bots",
        "Events",
        "Logs",
        "UI",
    ]);

    let inventory = Inventory {
        resources: names(&["automation", "block", "service_account"]),
        data_sources: names(&["automation", "block"]),
    };

    let report = engine.compute(&cloud_tags, &inventory);

    // Excluded tags are dropped entirely.
    assert!(report.get(&ResourceName::normalize("event")).is_none());
    assert!(report.get(&ResourceName::normalize("ui")).is_none());

    let statuses: Vec<(&str, bool, bool)> = report
        .iter()
        .map(|e| (e.resource.as_str(), e.has_resource, e.has_data_source))
        .collect();
    assert_eq!(
        statuses,
        vec![
            ("artifact", false, false),
            ("automation", true, true),
            ("block_document", true, true),
            ("block_type", true, true),
            ("bot", true, false),
        ]
    );
}

#[test]
fn test_fully_implemented_entries_are_flagged() {
    let entry = StatusEntry {
        resource: ResourceName::normalize("automation"),
        has_resource: true,
        has_data_source: true,
    };
    assert!(entry.is_fully_implemented());

    let gap = StatusEntry {
        has_data_source: false,
        ..entry
    };
    assert!(!gap.is_fully_implemented());
}

#[test]
fn test_wiki_page_written_to_disk() {
    let policy = AliasPolicy::from_toml_str(POLICY).unwrap();
    let engine = ParityEngine::new(policy);
    let report = engine.compute(
        &names(&["artifacts"]),
        &Inventory::default(),
    );

    let dir = tempdir().unwrap();
    let path = dir.path().join("wiki_output.md");
    let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();

    write_wiki_page(&path, &report, date).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("_Last updated: 2025-01-15_"));
    assert!(written.contains("| artifact | ❌ | ❌ |"));
}

//! Implementation-status reconciliation.
//!
//! The engine takes the deduplicated cloud tag set and the provider's
//! implemented inventory, applies the curated policy, and produces the
//! ordered status matrix everything downstream consumes.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::normalize::ResourceName;
use crate::policy::AliasPolicy;

/// What a provider currently implements: read-write resources and
/// read-only datasources, both in canonical form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    pub resources: BTreeSet<ResourceName>,
    pub data_sources: BTreeSet<ResourceName>,
}

/// Implementation status of a single cloud resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEntry {
    pub resource: ResourceName,
    pub has_resource: bool,
    pub has_data_source: bool,
}

impl StatusEntry {
    /// Both the resource and the datasource side are covered.
    pub fn is_fully_implemented(&self) -> bool {
        self.has_resource && self.has_data_source
    }
}

/// Ordered implementation-status matrix, one entry per non-excluded cloud
/// resource, in lexicographic order of the cloud tags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusReport {
    entries: Vec<StatusEntry>,
}

impl StatusReport {
    pub fn entries(&self) -> &[StatusEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &StatusEntry> {
        self.entries.iter()
    }

    /// Look up the entry for a cloud resource, if it is part of the report.
    pub fn get(&self, resource: &ResourceName) -> Option<&StatusEntry> {
        self.entries.iter().find(|entry| &entry.resource == resource)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The reconciliation engine.
///
/// Holds the immutable policy; `compute` is pure, so identical inputs
/// always produce identical reports.
#[derive(Debug, Clone, Default)]
pub struct ParityEngine {
    policy: AliasPolicy,
}

impl ParityEngine {
    pub fn new(policy: AliasPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &AliasPolicy {
        &self.policy
    }

    /// Reconcile the cloud tag set against the provider inventory.
    ///
    /// Tags arrive as a set, so they are already deduplicated and iterate
    /// in lexicographic order. Excluded tags are skipped before any entry
    /// is emitted.
    pub fn compute(&self, cloud_tags: &BTreeSet<ResourceName>, inventory: &Inventory) -> StatusReport {
        let mut entries = Vec::with_capacity(cloud_tags.len());

        for tag in cloud_tags {
            if self.policy.is_excluded(tag) {
                debug!("Skipping excluded cloud resource: {}", tag);
                continue;
            }

            entries.push(StatusEntry {
                resource: tag.clone(),
                has_resource: self.policy.is_satisfied(tag, &inventory.resources),
                has_data_source: self.policy.is_satisfied(tag, &inventory.data_sources),
            });
        }

        StatusReport { entries }
    }
}

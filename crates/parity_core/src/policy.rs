//! Curated alias and exclusion policy.
//!
//! The policy is hand-maintained configuration: a list of cloud resources
//! the provider will never implement, and a map of cloud resource names to
//! provider-side names accepted as equivalent coverage. It is loaded once
//! and passed into the engine as an immutable value so tests can supply
//! arbitrary policies.

use std::collections::{BTreeMap, BTreeSet};

use serde::Deserialize;

use crate::error::CoreResult;
use crate::normalize::ResourceName;

/// Exclusion set and alias mapping consulted during reconciliation.
///
/// Parsed from a TOML document:
///
/// ```toml
/// exclude = ["events", "logs"]
///
/// [aliases]
/// bots = ["service_account"]
/// block_documents = ["block"]
/// ```
///
/// Names are normalized on load, so the curated file may use either
/// naming convention.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct AliasPolicy {
    #[serde(rename = "exclude")]
    excluded: BTreeSet<ResourceName>,
    aliases: BTreeMap<ResourceName, BTreeSet<ResourceName>>,
}

impl AliasPolicy {
    pub fn new(
        excluded: BTreeSet<ResourceName>,
        aliases: BTreeMap<ResourceName, BTreeSet<ResourceName>>,
    ) -> Self {
        Self { excluded, aliases }
    }

    /// Parse a curated policy document.
    pub fn from_toml_str(text: &str) -> CoreResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Whether this cloud resource is deliberately never implemented.
    pub fn is_excluded(&self, resource: &ResourceName) -> bool {
        self.excluded.contains(resource)
    }

    /// Whether `resource` is covered by `implemented`, either directly or
    /// through one of its registered aliases.
    ///
    /// Aliasing is not transitive: aliases of aliases are not followed.
    pub fn is_satisfied(
        &self,
        resource: &ResourceName,
        implemented: &BTreeSet<ResourceName>,
    ) -> bool {
        if implemented.contains(resource) {
            return true;
        }

        self.aliases
            .get(resource)
            .is_some_and(|aliases| aliases.iter().any(|alias| implemented.contains(alias)))
    }
}

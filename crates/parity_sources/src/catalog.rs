//! Inventory interfaces.
//!
//! The engine itself only sees plain data; these traits are the seams the
//! CLI fetches that data through, and the seams tests replace with
//! in-memory fakes.

use std::collections::BTreeSet;

use async_trait::async_trait;

use parity_core::{Inventory, ResourceName};

use crate::error::SourceResult;

/// Source of the provider's implemented surface.
#[async_trait]
pub trait ProviderCatalog: Send + Sync {
    /// Fetch the resources and datasources of the latest published
    /// provider version, in canonical form.
    async fn fetch_inventory(&self) -> SourceResult<Inventory>;
}

/// Source of the cloud platform's API surface.
#[async_trait]
pub trait CloudCatalog: Send + Sync {
    /// Fetch the deduplicated set of canonical resource tags the cloud API
    /// exposes.
    async fn fetch_tags(&self) -> SourceResult<BTreeSet<ResourceName>>;
}

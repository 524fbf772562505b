//! # parity_core
//!
//! Reconciliation engine for the provider parity audit.
//!
//! This crate compares the set of resource tags exposed by a cloud
//! platform's API against the resources and datasources implemented by an
//! infrastructure-as-code provider, producing an ordered
//! implementation-status report. It is pure: fetching the two inventories
//! and consuming the report (console table, wiki page, tracking issues)
//! happen in the surrounding crates.
//!
//! ## Example
//!
//! ```rust
//! use std::collections::BTreeSet;
//! use parity_core::{AliasPolicy, Inventory, ParityEngine, ResourceName};
//!
//! let tags: BTreeSet<_> = ["automations", "artifacts"]
//!     .iter()
//!     .map(|t| ResourceName::normalize(t))
//!     .collect();
//!
//! let inventory = Inventory {
//!     resources: [ResourceName::normalize("automation")].into(),
//!     data_sources: [ResourceName::normalize("automation")].into(),
//! };
//!
//! let engine = ParityEngine::new(AliasPolicy::default());
//! let report = engine.compute(&tags, &inventory);
//! assert_eq!(report.len(), 2);
//! ```

pub mod error;
pub mod markdown;
pub mod normalize;
pub mod policy;
pub mod report;

pub use error::{CoreError, CoreResult};
pub use markdown::{render_wiki_page, write_wiki_page};
pub use normalize::ResourceName;
pub use policy::AliasPolicy;
pub use report::{Inventory, ParityEngine, StatusEntry, StatusReport};

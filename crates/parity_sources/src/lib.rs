//! # parity_sources
//!
//! Inventory fetchers for the provider parity audit.
//!
//! Two narrow interfaces feed the reconciliation engine: [`ProviderCatalog`]
//! yields the resources and datasources the provider currently implements
//! (from the Terraform registry listing of its latest published version),
//! and [`CloudCatalog`] yields the canonical resource tags the cloud API
//! exposes (from its OpenAPI document). Both are async traits so commands
//! can be exercised against in-memory fakes.
//!
//! Response parsing is kept separate from the HTTP calls; fetch failures
//! and malformed payloads propagate as [`SourceError`] and terminate the
//! run.

pub mod catalog;
pub mod error;
pub mod openapi;
pub mod registry;

pub use catalog::{CloudCatalog, ProviderCatalog};
pub use error::{SourceError, SourceResult};
pub use openapi::OpenApiCatalog;
pub use registry::RegistryCatalog;

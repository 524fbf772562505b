//! Terraform registry client.
//!
//! The registry's v2 API describes a provider in two steps: the provider
//! document lists its published versions, and a version document lists the
//! documentation entries ("provider-docs") of that version, categorized as
//! resources or data-sources. The slug of each doc entry is the
//! provider-side name of an implemented construct.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, info};

use parity_core::{Inventory, ResourceName};

use crate::catalog::ProviderCatalog;
use crate::error::{SourceError, SourceResult};

pub const DEFAULT_REGISTRY_URL: &str = "https://registry.terraform.io";

/// Fetches the implemented inventory from a Terraform-style registry.
pub struct RegistryCatalog {
    http: reqwest::Client,
    base_url: String,
    namespace: String,
    name: String,
}

impl RegistryCatalog {
    pub fn new(
        base_url: impl Into<String>,
        namespace: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> SourceResult<T> {
        debug!("GET {}", url);
        let resp = self.http.get(url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(|e| SourceError::MalformedResponse {
            url: url.to_string(),
            message: e.to_string(),
        })
    }

    /// Resolve the id of the latest published provider version.
    async fn latest_version_id(&self) -> SourceResult<String> {
        let url = format!(
            "{}/v2/providers/{}/{}?include=provider-versions",
            self.base_url, self.namespace, self.name
        );
        let document: ProviderDocument = self.get_json(&url).await?;
        latest_version_id(&document).map(str::to_string)
    }
}

#[async_trait]
impl ProviderCatalog for RegistryCatalog {
    async fn fetch_inventory(&self) -> SourceResult<Inventory> {
        let version_id = self.latest_version_id().await?;
        debug!("Latest provider version id: {}", version_id);

        let url = format!(
            "{}/v2/provider-versions/{}?include=provider-docs",
            self.base_url, version_id
        );
        let document: VersionDocument = self.get_json(&url).await?;

        let inventory = parse_inventory(&document);
        info!(
            "Provider implements {} resources and {} datasources",
            inventory.resources.len(),
            inventory.data_sources.len()
        );
        Ok(inventory)
    }
}

#[derive(Debug, Deserialize)]
struct ProviderDocument {
    data: ProviderData,
}

#[derive(Debug, Deserialize)]
struct ProviderData {
    relationships: ProviderRelationships,
}

#[derive(Debug, Deserialize)]
struct ProviderRelationships {
    #[serde(rename = "provider-versions")]
    provider_versions: VersionList,
}

#[derive(Debug, Deserialize)]
struct VersionList {
    data: Vec<VersionRef>,
}

#[derive(Debug, Deserialize)]
struct VersionRef {
    id: String,
}

#[derive(Debug, Deserialize)]
struct VersionDocument {
    included: Vec<IncludedDoc>,
}

#[derive(Debug, Deserialize)]
struct IncludedDoc {
    attributes: DocAttributes,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DocAttributes {
    category: Option<String>,
    slug: Option<String>,
}

/// The version list is ordered oldest-first; the last entry is the latest
/// release.
fn latest_version_id(document: &ProviderDocument) -> SourceResult<&str> {
    document
        .data
        .relationships
        .provider_versions
        .data
        .last()
        .map(|version| version.id.as_str())
        .ok_or(SourceError::NoVersions)
}

fn parse_inventory(document: &VersionDocument) -> Inventory {
    let mut inventory = Inventory::default();

    for item in &document.included {
        let attributes = &item.attributes;
        let (Some(category), Some(slug)) = (&attributes.category, &attributes.slug) else {
            continue;
        };

        let name = ResourceName::normalize(slug);
        match category.as_str() {
            "resources" => {
                inventory.resources.insert(name);
            }
            "data-sources" => {
                inventory.data_sources.insert(name);
            }
            other => debug!("Ignoring provider doc with category {:?}", other),
        }
    }

    inventory
}

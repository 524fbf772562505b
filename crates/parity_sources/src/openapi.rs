//! Cloud OpenAPI client.
//!
//! The cloud API groups its endpoints with tags; the union of all tags
//! across every path and method is the platform's resource surface as far
//! as the audit is concerned.

use std::collections::BTreeSet;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info};

use parity_core::ResourceName;

use crate::catalog::CloudCatalog;
use crate::error::{SourceError, SourceResult};

/// Fetches the cloud resource tags from an OpenAPI document.
pub struct OpenApiCatalog {
    http: reqwest::Client,
    url: String,
}

impl OpenApiCatalog {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl CloudCatalog for OpenApiCatalog {
    async fn fetch_tags(&self) -> SourceResult<BTreeSet<ResourceName>> {
        debug!("GET {}", self.url);
        let resp = self.http.get(&self.url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        let body = resp.text().await?;
        let document: OpenApiDocument =
            serde_json::from_str(&body).map_err(|e| SourceError::MalformedResponse {
                url: self.url.clone(),
                message: e.to_string(),
            })?;

        let tags = collect_tags(&document);
        info!("Cloud API exposes {} resource tags", tags.len());
        Ok(tags)
    }
}

#[derive(Debug, Deserialize)]
struct OpenApiDocument {
    paths: serde_json::Map<String, Value>,
}

/// Union the `tags` arrays of every operation under every path.
///
/// Path items can carry non-operation keys ("parameters", "summary"), and
/// operations can omit `tags`; both contribute nothing.
fn collect_tags(document: &OpenApiDocument) -> BTreeSet<ResourceName> {
    let mut tags = BTreeSet::new();

    for item in document.paths.values() {
        let Some(operations) = item.as_object() else {
            continue;
        };

        for operation in operations.values() {
            let Some(values) = operation.get("tags").and_then(Value::as_array) else {
                continue;
            };

            for tag in values.iter().filter_map(Value::as_str) {
                tags.insert(ResourceName::normalize(tag));
            }
        }
    }

    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_tags_unions_across_paths_and_methods() {
        let document: OpenApiDocument = serde_json::from_str(
            r#"{
                "paths": {
                    "/api/automations/": {
                        "get": {"tags": ["Automations"]},
                        "post": {"tags": ["Automations"]}
                    },
                    "/api/block_capabilities/": {
                        "get": {"tags": ["Block Capabilities"]}
                    },
                    "/api/flows/{id}": {
                        "parameters": [{"name": "id"}],
                        "delete": {"tags": ["Flows", "Automations"]}
                    }
                }
            }"#,
        )
        .unwrap();

        let tags = collect_tags(&document);

        let collected: Vec<&str> = tags.iter().map(ResourceName::as_str).collect();
        assert_eq!(collected, vec!["automation", "block_capability", "flow"]);
    }

    #[test]
    fn test_operations_without_tags_contribute_nothing() {
        let document: OpenApiDocument = serde_json::from_str(
            r#"{
                "paths": {
                    "/api/health": {"get": {"summary": "health check"}},
                    "/api/hello": {"get": {"tags": []}}
                }
            }"#,
        )
        .unwrap();

        assert!(collect_tags(&document).is_empty());
    }

    #[test]
    fn test_document_without_paths_fails_to_parse() {
        assert!(serde_json::from_str::<OpenApiDocument>(r#"{"openapi": "3.0.0"}"#).is_err());
    }
}

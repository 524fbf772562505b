//! CLI command definitions.
//!
//! Each subcommand runs the same audit pipeline (fetch both inventories,
//! reconcile) and feeds a different sink: the console, the wiki page, or
//! the issue tracker.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;

use parity_core::{AliasPolicy, ParityEngine, StatusReport};
use parity_sources::{CloudCatalog, OpenApiCatalog, ProviderCatalog, RegistryCatalog};

pub mod audit;
pub mod report;
pub mod sync_issues;

/// parity - cloud/provider parity audit
#[derive(Parser)]
#[command(name = "parity")]
#[command(version, about = "Audit provider coverage of a cloud platform's API surface")]
#[command(long_about = r#"
Reconciles the cloud platform's API surface (OpenAPI resource tags) against
the resources and datasources the infrastructure-as-code provider actually
implements, and reports the gap.

COMMANDS:
  audit        → Print the implementation-status table to the console
  report       → Write the status table to a markdown wiki page
  sync-issues  → Create/update/close tracking issues for each gap

EXIT CODES:
  0 - Success
  1 - General error
  2 - Invalid arguments
  3 - Inventory fetch error
  4 - Issue-sync error
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the implementation-status table
    Audit(audit::AuditArgs),

    /// Write the status table to a markdown wiki page
    Report(report::ReportArgs),

    /// Synchronize tracking issues with the current gap
    #[command(name = "sync-issues")]
    SyncIssues(sync_issues::SyncIssuesArgs),
}

/// Options shared by every subcommand: where the two inventories live and
/// which curated policy to apply.
#[derive(Args)]
pub struct SourceArgs {
    /// Registry API base URL
    #[arg(long, env = "PARITY_REGISTRY_URL", default_value = parity_sources::registry::DEFAULT_REGISTRY_URL)]
    pub registry_url: String,

    /// Registry namespace of the provider
    #[arg(long, env = "PARITY_REGISTRY_NAMESPACE")]
    pub registry_namespace: String,

    /// Registry name of the provider
    #[arg(long, env = "PARITY_REGISTRY_NAME")]
    pub registry_name: String,

    /// URL of the cloud platform's OpenAPI document
    #[arg(long, env = "PARITY_OPENAPI_URL")]
    pub openapi_url: String,

    /// Path to the curated alias/exclusion policy file
    #[arg(long, env = "PARITY_POLICY_FILE")]
    pub policy: Option<PathBuf>,
}

impl SourceArgs {
    pub fn load_policy(&self) -> Result<AliasPolicy> {
        match &self.policy {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read policy file {}", path.display()))?;
                Ok(AliasPolicy::from_toml_str(&text)?)
            }
            None => Ok(AliasPolicy::default()),
        }
    }
}

/// Fetch both inventories and reconcile them.
pub async fn fetch_status_report(source: &SourceArgs) -> Result<(AliasPolicy, StatusReport)> {
    let policy = source.load_policy()?;

    let registry = RegistryCatalog::new(
        &source.registry_url,
        &source.registry_namespace,
        &source.registry_name,
    );
    let cloud = OpenApiCatalog::new(&source.openapi_url);

    info!(
        "Fetching implemented surface of {}/{}",
        source.registry_namespace, source.registry_name
    );
    let inventory = registry.fetch_inventory().await?;

    info!("Fetching cloud resource tags");
    let cloud_tags = cloud.fetch_tags().await?;

    let engine = ParityEngine::new(policy.clone());
    let report = engine.compute(&cloud_tags, &inventory);

    Ok((policy, report))
}

//! Sync-issues command - Reconcile the tracking-issue set.

use anyhow::Result;
use clap::Args;
use tracing::info;

use parity_sync::{apply_sync, plan_sync, GitHubTracker, IssueTracker};

use crate::commands::{fetch_status_report, SourceArgs};

#[derive(Args)]
pub struct SyncIssuesArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Repository holding the tracking issues, in owner/name form
    #[arg(long, env = "PARITY_REPO")]
    repo: String,

    /// API token used for issue reads and writes
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: String,

    /// Label identifying tracking issues
    #[arg(long, default_value = "parity-audit")]
    label: String,

    /// Title prefix identifying tracking issues
    #[arg(long, default_value = "Feature Request: ")]
    title_prefix: String,
}

pub async fn execute(args: SyncIssuesArgs) -> Result<()> {
    let (policy, report) = fetch_status_report(&args.source).await?;

    let tracker = GitHubTracker::new(&args.repo, &args.token)?;

    info!("Listing open {} issues in {}", args.label, args.repo);
    let open_issues = tracker.list_open_issues(&args.label).await?;

    let actions = plan_sync(&report, &policy, &open_issues, &args.title_prefix);
    if actions.is_empty() {
        println!("✅ Tracking issues are already in sync");
        return Ok(());
    }

    apply_sync(&tracker, &actions, &args.label).await?;

    println!("✅ Applied {} tracking-issue changes", actions.len());

    Ok(())
}

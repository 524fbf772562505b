//! Audit command - Print the status table.

use anyhow::Result;
use clap::Args;

use crate::commands::{fetch_status_report, SourceArgs};
use crate::output;

#[derive(Args)]
pub struct AuditArgs {
    #[command(flatten)]
    source: SourceArgs,
}

pub async fn execute(args: AuditArgs) -> Result<()> {
    let (_, report) = fetch_status_report(&args.source).await?;

    println!("{}", output::status_table(&report));

    let gaps = report
        .iter()
        .filter(|entry| !entry.is_fully_implemented())
        .count();
    if gaps == 0 {
        println!("✅ Full parity: all {} cloud resources are covered", report.len());
    } else {
        println!("{} of {} cloud resources lack full coverage", gaps, report.len());
    }

    Ok(())
}

//! Report command - Write the wiki page.

use std::path::PathBuf;

use anyhow::Result;
use chrono::Utc;
use clap::Args;

use parity_core::write_wiki_page;

use crate::commands::{fetch_status_report, SourceArgs};

#[derive(Args)]
pub struct ReportArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Where to write the markdown page
    #[arg(short, long, default_value = "wiki_output.md")]
    output: PathBuf,
}

pub async fn execute(args: ReportArgs) -> Result<()> {
    let (_, report) = fetch_status_report(&args.source).await?;

    write_wiki_page(&args.output, &report, Utc::now().date_naive())?;

    println!(
        "✅ Wrote status for {} cloud resources to {}",
        report.len(),
        args.output.display()
    );

    Ok(())
}

//! Wiki page rendering.
//!
//! Renders the status report as a GitHub-flavored markdown table with a
//! timestamped header line, suitable for publishing to the repo wiki.

use std::path::Path;

use chrono::NaiveDate;

use crate::error::CoreResult;
use crate::report::StatusReport;

const IMPLEMENTED: &str = "✅";
const MISSING: &str = "❌";

/// Render the wiki page for a status report.
///
/// The date is passed in by the caller so rendering stays deterministic.
pub fn render_wiki_page(report: &StatusReport, updated: NaiveDate) -> String {
    let mut page = format!("_Last updated: {updated}_\n\n");
    page.push_str("| Cloud Resource | Resource | Datasource |\n");
    page.push_str("| --- | --- | --- |\n");

    for entry in report.iter() {
        let resource = if entry.has_resource { IMPLEMENTED } else { MISSING };
        let data_source = if entry.has_data_source { IMPLEMENTED } else { MISSING };
        page.push_str(&format!("| {} | {} | {} |\n", entry.resource, resource, data_source));
    }

    page
}

/// Render the wiki page and write it to `path`.
pub fn write_wiki_page(path: &Path, report: &StatusReport, updated: NaiveDate) -> CoreResult<()> {
    std::fs::write(path, render_wiki_page(report, updated))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::normalize::ResourceName;
    use crate::policy::AliasPolicy;
    use crate::report::{Inventory, ParityEngine};

    fn sample_report() -> StatusReport {
        let tags: BTreeSet<_> = ["artifacts", "automations"]
            .iter()
            .map(|t| ResourceName::normalize(t))
            .collect();
        let inventory = Inventory {
            resources: [ResourceName::normalize("automation")].into(),
            data_sources: BTreeSet::new(),
        };
        ParityEngine::new(AliasPolicy::default()).compute(&tags, &inventory)
    }

    #[test]
    fn test_render_wiki_page_layout() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();

        let page = render_wiki_page(&sample_report(), date);

        assert_eq!(
            page,
            "_Last updated: 2025-01-15_\n\
             \n\
             | Cloud Resource | Resource | Datasource |\n\
             | --- | --- | --- |\n\
             | artifact | ❌ | ❌ |\n\
             | automation | ✅ | ❌ |\n"
        );
    }

    #[test]
    fn test_render_empty_report_has_only_header() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();

        let page = render_wiki_page(&StatusReport::default(), date);

        assert!(page.starts_with("_Last updated: 2025-01-15_"));
        assert_eq!(page.lines().count(), 4);
    }
}

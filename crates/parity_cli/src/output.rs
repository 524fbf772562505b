//! Console rendering of the status report.

use tabled::builder::Builder;
use tabled::settings::Style;

use parity_core::StatusReport;

const IMPLEMENTED: &str = "✅";
const MISSING: &str = "❌";

/// Render the report as a console table.
pub fn status_table(report: &StatusReport) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Cloud Resource", "Resource", "Datasource"]);

    for entry in report.iter() {
        builder.push_record([
            entry.resource.as_str(),
            if entry.has_resource { IMPLEMENTED } else { MISSING },
            if entry.has_data_source { IMPLEMENTED } else { MISSING },
        ]);
    }

    builder.build().with(Style::rounded()).to_string()
}

pub mod report;

pub use report::{EXIT_FATAL, EXIT_GROUP_FAILURE, EXIT_OK, GroupOutcome, GroupReport, RunReport};

use crate::archive::{group_parts, scan_directory, select_entry};
use crate::core::context::AppContext;
use crate::errors::Result;
use crate::extract::{ToolRunner, extract_group};
use crate::ui::table_printer::TablePrinter;

/// Scan the directory once, then select and extract every group in turn.
///
/// A group that has no entry part or whose extraction fails is reported and
/// skipped. Fatal errors stop the run at once; groups already handled stay
/// handled.
pub fn run<R: ToolRunner + ?Sized>(ctx: &AppContext, runner: &mut R) -> Result<RunReport> {
    let listing = scan_directory(&ctx.dir)?;
    for raw in &listing.skipped {
        ctx.logger.warn(format!(
            "Skipping '{}': name is not valid UTF-8",
            raw.to_string_lossy()
        ));
    }
    let groups = group_parts(listing.names);
    let mut report = RunReport::default();

    if groups.is_empty() {
        ctx.logger
            .info(format!("No .rar files found in {}", ctx.dir.display()));
    }

    for group in groups {
        let outcome = match select_entry(&group) {
            Ok(entry) => extract_group(ctx, &group, entry, runner)?,
            Err(err) => {
                ctx.logger.error(err.to_string());
                GroupOutcome::Failed(err)
            }
        };
        report.push(group, outcome);
    }

    if !report.is_empty() {
        log_summary(ctx, &report);
    }
    Ok(report)
}

// Goes through the logger so the session file records it too.
fn log_summary(ctx: &AppContext, report: &RunReport) {
    let printer = TablePrinter::new();
    let rows = printer.fit_rows(&report.rows());
    for line in printer.render_lines("Summary", &RunReport::HEADERS, &rows) {
        ctx.logger.info(line);
    }
}

use std::fs;

use crate::archive::ArchiveGroup;
use crate::core::context::AppContext;
use crate::errors::{Error, Result};
use crate::extract::{ExtractionCommand, ToolRunner};
use crate::orchestrator::GroupOutcome;

/// Run the tool on `entry` and clean up `group` when asked to.
///
/// A non-zero exit is reported and returned as a failed outcome; the files
/// are kept. `Err` is reserved for failures that should end the run: the
/// tool could not be started, or a source part could not be deleted.
pub fn extract_group<R: ToolRunner + ?Sized>(
    ctx: &AppContext,
    group: &ArchiveGroup,
    entry: &str,
    runner: &mut R,
) -> Result<GroupOutcome> {
    let command = ExtractionCommand::build(&ctx.config, entry);
    ctx.logger.info(format!("Extracting {entry}"));
    let status = runner.run(&command, &ctx.dir)?;

    if !status.success() {
        let err = Error::ExtractionFailed {
            entry: entry.to_string(),
            members: group.members().to_vec(),
            code: status.code,
        };
        ctx.logger.error(err.to_string());
        return Ok(GroupOutcome::Failed(err));
    }

    let mut removed = 0;
    if ctx.config.delete_after_success {
        for member in group.members() {
            let path = ctx.dir.join(member);
            fs::remove_file(&path).map_err(|source| Error::DeletionFailed { path, source })?;
            removed += 1;
        }
        ctx.logger
            .info(format!("Removed {removed} file(s) for {entry}"));
    }

    Ok(GroupOutcome::Extracted {
        entry: entry.to_string(),
        removed,
    })
}

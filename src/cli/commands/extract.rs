use anyhow::Result;

use super::super::args::ExtractCommand;
use super::{CommandResult, CommandSummary, ExtractSummary};
use crate::core::{
    context::PipelineContext,
    pipeline::{TemplateOutput, build_template},
};

pub fn extract(cmd: ExtractCommand) -> Result<CommandResult> {
    let ctx = PipelineContext::new(&cmd.common)?;
    let output = build_template(&ctx)?;

    Ok(CommandResult::new(CommandSummary::Extract(
        extract_summary(&output),
    )))
}

pub(super) fn extract_summary(output: &TemplateOutput) -> ExtractSummary {
    ExtractSummary {
        string_count: output.catalog.len(),
        files_scanned: output.files_scanned,
        ignored_files: output.ignored_files,
        project_version: output.catalog.header.project_version.clone(),
        pot_file: output.pot_file.clone(),
    }
}

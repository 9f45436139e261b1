use anyhow::Result;

use super::super::args::RunCommand;
use super::extract::extract_summary;
use super::helper::translate_stage;
use super::{CommandResult, CommandSummary};
use crate::core::{context::PipelineContext, pipeline::build_template};

/// Full pipeline: the template is written before any translation starts.
pub async fn run(cmd: RunCommand) -> Result<CommandResult> {
    let ctx = PipelineContext::new(&cmd.common)?;
    let output = build_template(&ctx)?;
    let translated = translate_stage(&ctx, &cmd.translate, &output.catalog).await?;

    Ok(CommandResult::new(CommandSummary::Run(
        extract_summary(&output),
        translated,
    )))
}

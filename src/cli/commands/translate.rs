use anyhow::Result;

use super::super::args::TranslateCommand;
use super::helper::translate_stage;
use super::{CommandResult, CommandSummary};
use crate::core::{context::PipelineContext, pipeline::load_template};

/// Translate the template written by a previous `extract`.
pub async fn translate(cmd: TranslateCommand) -> Result<CommandResult> {
    let ctx = PipelineContext::new(&cmd.common)?;
    let template = load_template(&ctx.pot_file)?;
    tracing::info!(
        "Loaded {} strings from {}",
        template.len(),
        ctx.pot_file.display()
    );

    let summary = translate_stage(&ctx, &cmd.translate, &template).await?;
    Ok(CommandResult::new(CommandSummary::Translate(summary)))
}

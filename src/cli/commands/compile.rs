use anyhow::{Result, bail};

use super::super::args::CompileCommand;
use super::{CommandResult, CommandSummary, CompileSummary, CompiledCatalog};
use crate::{
    config::validate_language_tag,
    core::{
        catalog::writer::{catalog_paths, compile_catalog},
        context::PipelineContext,
    },
};

/// Rebuild `.mo` files from the `.po` files in the output directory.
pub fn compile(cmd: CompileCommand) -> Result<CommandResult> {
    let ctx = PipelineContext::new(&cmd.common)?;
    let languages = if cmd.languages.is_empty() {
        ctx.config.languages.clone()
    } else {
        cmd.languages.clone()
    };

    let mut compiled = Vec::new();
    let mut missing = Vec::new();
    for language in languages.iter().map(|l| l.trim()) {
        validate_language_tag(language)?;
        let paths = catalog_paths(&ctx.output_dir, &ctx.plugin_slug, language);
        if !paths.po.is_file() {
            tracing::warn!("No catalog for {} at {}", language, paths.po.display());
            missing.push(paths.po);
            continue;
        }
        let translated = compile_catalog(&paths)?;
        tracing::debug!(mo = %paths.mo.display(), translated, "compiled");
        compiled.push(CompiledCatalog {
            language: language.to_string(),
            translated,
            paths,
        });
    }

    if compiled.is_empty() {
        bail!("No .po catalogs found in {}", ctx.output_dir.display());
    }

    Ok(CommandResult::new(CommandSummary::Compile(
        CompileSummary { compiled, missing },
    )))
}

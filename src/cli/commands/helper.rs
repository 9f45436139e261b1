use anyhow::Result;

use super::TranslateSummary;
use crate::{
    cli::args::TranslateArgs,
    core::{
        catalog::Catalog,
        context::{PipelineContext, TranslationSettings},
        pipeline::{TranslationOutcome, TranslationPlan, translate_template},
        translate::OpenAiTranslator,
    },
};

/// Translate `template` with the settings merged from `args` and the config.
///
/// Without an API key nothing is translated and the summary is `Skipped`.
pub async fn translate_stage(
    ctx: &PipelineContext,
    args: &TranslateArgs,
    template: &Catalog,
) -> Result<TranslateSummary> {
    let settings = TranslationSettings::new(args, &ctx.config)?;
    let translator = settings
        .api_key
        .as_deref()
        .map(|key| OpenAiTranslator::new(key, &settings.model, &settings.api_base))
        .transpose()?;

    if let Some(ref translator) = translator {
        tracing::debug!(
            endpoint = translator.endpoint(),
            model = translator.model(),
            delay = ?settings.policy.delay,
            "translation backend"
        );
    }

    let plan = TranslationPlan {
        languages: &settings.languages,
        output_dir: &ctx.output_dir,
        plugin_slug: &ctx.plugin_slug,
        policy: settings.policy,
    };

    let summary = match translate_template(translator.as_ref(), template, &plan).await? {
        TranslationOutcome::Completed(languages) => TranslateSummary::Completed {
            entry_count: template.len(),
            languages,
        },
        TranslationOutcome::Skipped => TranslateSummary::Skipped,
    };
    Ok(summary)
}

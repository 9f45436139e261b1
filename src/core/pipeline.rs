//! The two pipeline stages: building the template catalog from source, and
//! producing per-language catalogs from it.

use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::Instrument;

use crate::core::{
    catalog::{
        Catalog,
        po::{read_po, write_po},
        writer::{CatalogPaths, write_localized_catalog},
    },
    context::PipelineContext,
    error::L10nError,
    extract::extract_strings,
    file_scanner::scan_files,
    language::TargetLanguage,
    translate::{ThrottlePolicy, Translator, translate_catalog},
    version::resolve_project_version,
};

pub struct TemplateOutput {
    pub catalog: Catalog,
    pub pot_file: PathBuf,
    pub files_scanned: usize,
    pub ignored_files: usize,
}

/// Extract strings from the source tree and write the template catalog.
///
/// Preconditions are checked before anything is written: the source root
/// must exist and the project version must resolve.
pub fn build_template(ctx: &PipelineContext) -> Result<TemplateOutput, L10nError> {
    if !ctx.source_root.is_dir() {
        return Err(L10nError::SourceDirMissing(ctx.source_root.clone()));
    }
    let config = &ctx.config;
    let version = resolve_project_version(
        &ctx.version_file,
        &config.version_section,
        &config.version_key,
    )?;
    let rules = ctx.extraction_rules()?;

    tracing::info!("Extracting localizable strings...");
    let scan = scan_files(&ctx.source_root, &config.extensions, &ctx.ignore_patterns())?;
    let extraction = extract_strings(&ctx.source_root, &scan.files, &rules)?;
    tracing::info!("Found {} translatable strings.", extraction.len());

    let catalog = Catalog::template(extraction.strings(), &version, &config.contact, Utc::now());
    write_po(&catalog, &ctx.pot_file)?;
    tracing::info!("POT file saved to {}", ctx.pot_file.display());

    Ok(TemplateOutput {
        catalog,
        pot_file: ctx.pot_file.clone(),
        files_scanned: extraction.files_scanned,
        ignored_files: scan.ignored_count,
    })
}

/// Read a previously written template catalog.
pub fn load_template(pot_file: &Path) -> Result<Catalog, L10nError> {
    if !pot_file.is_file() {
        return Err(L10nError::TemplateMissing(pot_file.to_path_buf()));
    }
    read_po(pot_file)
}

/// Where and how translated catalogs are produced.
pub struct TranslationPlan<'a> {
    pub languages: &'a [TargetLanguage],
    pub output_dir: &'a Path,
    pub plugin_slug: &'a str,
    pub policy: ThrottlePolicy,
}

#[derive(Debug)]
pub struct LanguageOutput {
    pub language: TargetLanguage,
    pub translated: usize,
    pub paths: CatalogPaths,
}

#[derive(Debug)]
pub enum TranslationOutcome {
    Completed(Vec<LanguageOutput>),
    /// No translator was available; nothing was written.
    Skipped,
}

impl TranslationOutcome {
    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped)
    }
}

/// Translate `template` into every planned language, one language at a time.
pub async fn translate_template<T: Translator>(
    translator: Option<&T>,
    template: &Catalog,
    plan: &TranslationPlan<'_>,
) -> Result<TranslationOutcome, L10nError> {
    let Some(translator) = translator else {
        tracing::warn!("OpenAI API key not found. Skipping translation.");
        return Ok(TranslationOutcome::Skipped);
    };

    tracing::info!("Translating and generating PO/MO files...");
    let mut outputs = Vec::with_capacity(plan.languages.len());
    for language in plan.languages {
        let span = tracing::info_span!("translate", lang = %language);
        let catalog = translate_catalog(translator, template, language, &plan.policy)
            .instrument(span)
            .await?;
        let paths = write_localized_catalog(&catalog, plan.output_dir, plan.plugin_slug)?;
        outputs.push(LanguageOutput {
            language: language.clone(),
            translated: catalog.translated_count(),
            paths,
        });
    }

    Ok(TranslationOutcome::Completed(outputs))
}

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use glob::Pattern;

use crate::{
    cli::args::{CommonArgs, TranslateArgs},
    config::{Config, load_config, validate_language_tag},
    core::{
        error::L10nError, extract::ExtractionRules, language::TargetLanguage,
        translate::ThrottlePolicy,
    },
};

/// Slug used when neither the CLI, the config nor the source root name one.
const FALLBACK_SLUG: &str = "messages";

/// Resolved locations and settings for one pipeline run.
///
/// # Configuration Priority
///
/// 1. CLI arguments (e.g., `--source-root plugin/`), relative to the working directory
/// 2. `.l10nrc.json`, relative to the directory holding the file
/// 3. Built-in defaults
pub struct PipelineContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,

    /// Directory the config file was found in (or `--path` without one).
    pub root_dir: PathBuf,

    /// Directory scanned for translatable strings.
    pub source_root: PathBuf,

    /// INI file carrying the project version.
    pub version_file: PathBuf,

    /// Destination of per-language `.po`/`.mo` files.
    pub output_dir: PathBuf,

    /// Destination of the template catalog.
    pub pot_file: PathBuf,

    /// Prefix of every generated file name.
    pub plugin_slug: String,

    pub verbose: bool,
}

impl PipelineContext {
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let config_result = load_config(&common_args.path)?;

        if config_result.from_file {
            tracing::debug!(root = %config_result.root.display(), "loaded configuration");
        } else {
            tracing::debug!("No .l10nrc.json found, using default configuration");
        }

        let mut config = config_result.config;
        let root_dir = config_result.root;

        if let Some(ref slug) = common_args.plugin_slug {
            config.plugin_slug = Some(slug.clone());
        }

        let source_root = common_args
            .source_root
            .clone()
            .unwrap_or_else(|| resolve_path(&root_dir, &config.source_root));
        let version_file = common_args
            .version_file
            .clone()
            .unwrap_or_else(|| resolve_path(&root_dir, &config.version_file));
        let output_dir = match (&common_args.output_dir, &config.output_dir) {
            (Some(dir), _) => dir.clone(),
            (None, Some(dir)) => resolve_path(&root_dir, dir),
            (None, None) => source_root.join("languages"),
        };

        let plugin_slug = config
            .plugin_slug
            .clone()
            .or_else(|| directory_name(&source_root))
            .unwrap_or_else(|| FALLBACK_SLUG.to_string());

        let pot_file = match (&common_args.pot_file, &config.pot_file) {
            (Some(file), _) => file.clone(),
            (None, Some(file)) => resolve_path(&root_dir, file),
            (None, None) => output_dir.join(format!("{plugin_slug}.pot")),
        };

        Ok(Self {
            config,
            root_dir,
            source_root,
            version_file,
            output_dir,
            pot_file,
            plugin_slug,
            verbose: common_args.verbose,
        })
    }

    pub fn extraction_rules(&self) -> Result<ExtractionRules, L10nError> {
        ExtractionRules::new(&self.config.markers, &self.config.domain_token)
    }

    /// Compiled `ignores` globs. Invalid ones were rejected when loading.
    pub fn ignore_patterns(&self) -> Vec<Pattern> {
        self.config
            .ignores
            .iter()
            .filter_map(|p| Pattern::new(p).ok())
            .collect()
    }
}

/// Everything the translation stage needs besides the template itself.
pub struct TranslationSettings {
    pub languages: Vec<TargetLanguage>,
    /// `None` means translation is skipped.
    pub api_key: Option<String>,
    pub model: String,
    pub api_base: String,
    pub policy: ThrottlePolicy,
}

impl TranslationSettings {
    pub fn new(args: &TranslateArgs, config: &Config) -> Result<Self> {
        let tags = if args.languages.is_empty() {
            config.languages.clone()
        } else {
            args.languages.clone()
        };
        let mut languages = Vec::with_capacity(tags.len());
        for tag in tags.iter().map(|t| t.trim()) {
            validate_language_tag(tag)
                .with_context(|| format!("Unsupported target language \"{tag}\""))?;
            languages.push(TargetLanguage::new(tag));
        }

        let api_key = args
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(String::from);

        Ok(Self {
            languages,
            api_key,
            model: args
                .model
                .clone()
                .unwrap_or_else(|| config.translator.model.clone()),
            api_base: args
                .api_base
                .clone()
                .unwrap_or_else(|| config.translator.api_base.clone()),
            policy: ThrottlePolicy::from_secs(
                args.delay_secs.unwrap_or(config.translator.delay_secs),
            ),
        })
    }
}

fn resolve_path(root: &Path, path: &str) -> PathBuf {
    let path = Path::new(path);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path).components().collect()
    }
}

/// Final component of `dir`, looking through `.` and `..`.
fn directory_name(dir: &Path) -> Option<String> {
    let dir = dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf());
    dir.file_name()
        .and_then(|name| name.to_str())
        .map(String::from)
}

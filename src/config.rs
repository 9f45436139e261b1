use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".l10nrc.json";

/// WordPress i18n functions whose first argument is a translatable literal.
pub const DEFAULT_MARKERS: &[&str] = &[
    "__",
    "_e",
    "_x",
    "_n",
    "_nx",
    "esc_html__",
    "esc_html_e",
    "esc_html_x",
];

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plugin_slug: Option<String>,
    #[serde(default = "default_source_root")]
    pub source_root: String,
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default = "default_markers")]
    pub markers: Vec<String>,
    #[serde(default = "default_domain_token")]
    pub domain_token: String,
    #[serde(default = "default_version_file")]
    pub version_file: String,
    #[serde(default = "default_version_section")]
    pub version_section: String,
    #[serde(default = "default_version_key")]
    pub version_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pot_file: Option<String>,
    #[serde(default = "default_languages")]
    pub languages: Vec<String>,
    #[serde(default = "default_contact")]
    pub contact: String,
    #[serde(default)]
    pub translator: TranslatorConfig,
}

/// Settings for the machine translation backend.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslatorConfig {
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Seconds to wait after every translation request.
    #[serde(default = "default_delay_secs")]
    pub delay_secs: u64,
}

fn default_source_root() -> String {
    "./".to_string()
}

fn default_extensions() -> Vec<String> {
    vec!["php".to_string()]
}

fn default_markers() -> Vec<String> {
    DEFAULT_MARKERS.iter().map(|m| m.to_string()).collect()
}

fn default_domain_token() -> String {
    "Strings::Domain".to_string()
}

fn default_version_file() -> String {
    ".bumpversion.cfg".to_string()
}

fn default_version_section() -> String {
    "bumpversion".to_string()
}

fn default_version_key() -> String {
    "current_version".to_string()
}

fn default_languages() -> Vec<String> {
    ["fr", "es", "de"].map(String::from).to_vec()
}

fn default_contact() -> String {
    "Bogdan Dobrica <bdobrica@gmail.com>".to_string()
}

fn default_model() -> String {
    "gpt-4o".to_string()
}

fn default_api_base() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_delay_secs() -> u64 {
    5
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            api_base: default_api_base(),
            delay_secs: default_delay_secs(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            plugin_slug: None,
            source_root: default_source_root(),
            ignores: Vec::new(),
            extensions: default_extensions(),
            markers: default_markers(),
            domain_token: default_domain_token(),
            version_file: default_version_file(),
            version_section: default_version_section(),
            version_key: default_version_key(),
            output_dir: None,
            pot_file: None,
            languages: default_languages(),
            contact: default_contact(),
            translator: TranslatorConfig::default(),
        }
    }
}

/// Returns an error unless `tag` looks like `fr`, `pt_BR` or `zh-Hant`.
pub fn validate_language_tag(tag: &str) -> Result<()> {
    let re = Regex::new(r"^[A-Za-z]{2,3}(?:[_-][A-Za-z0-9]{2,8})*$")?;
    if !re.is_match(tag) {
        bail!("Invalid language tag in 'languages': \"{}\"", tag);
    }
    Ok(())
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error for invalid `ignores` globs, marker names that are not
    /// plain identifiers, malformed language tags, or empty required lists.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        if self.markers.is_empty() {
            bail!("'markers' must name at least one translation function");
        }
        let identifier = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$")?;
        for marker in &self.markers {
            if !identifier.is_match(marker) {
                bail!("Invalid function name in 'markers': \"{}\"", marker);
            }
        }

        if self.domain_token.trim().is_empty() {
            bail!("'domainToken' must not be empty");
        }
        if self.extensions.is_empty() {
            bail!("'extensions' must list at least one file extension");
        }

        if self.languages.is_empty() {
            bail!("'languages' must list at least one target language");
        }
        for tag in &self.languages {
            validate_language_tag(tag)?;
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Directory that relative paths in the config are resolved against:
    /// the config file's directory, or the start directory when using defaults.
    pub root: PathBuf,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            let root = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            Ok(ConfigLoadResult {
                config,
                root,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            root: start_dir.to_path_buf(),
            from_file: false,
        }),
    }
}

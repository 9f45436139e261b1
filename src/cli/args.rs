//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `run`: Extract strings, write the template, then translate it
//! - `extract`: Only write the template catalog
//! - `translate`: Translate an existing template catalog
//! - `compile`: Rebuild `.mo` files from (hand-edited) `.po` files
//! - `init`: Initialize l10n configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Run(cmd)) => cmd.common.verbose,
            Some(Command::Extract(cmd)) => cmd.common.verbose,
            Some(Command::Translate(cmd)) => cmd.common.verbose,
            Some(Command::Compile(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all pipeline commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Directory to start searching for .l10nrc.json from
    #[arg(long, default_value = ".")]
    pub path: PathBuf,

    /// Plugin source directory (overrides config file)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// INI file holding the project version (overrides config file)
    #[arg(long)]
    pub version_file: Option<PathBuf>,

    /// Directory for generated .po/.mo files (overrides config file)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Template catalog path (overrides config file)
    #[arg(long)]
    pub pot_file: Option<PathBuf>,

    /// Prefix of generated file names (overrides config file)
    #[arg(long)]
    pub plugin_slug: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Args)]
pub struct TranslateArgs {
    /// Target languages (overrides config file)
    /// Comma separated: --languages fr,es,pt_BR
    #[arg(long, value_delimiter = ',')]
    pub languages: Vec<String>,

    /// OpenAI API key; translation is skipped when absent
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Chat model used for translation (overrides config file)
    #[arg(long)]
    pub model: Option<String>,

    /// Base URL of an OpenAI-compatible API (overrides config file)
    #[arg(long)]
    pub api_base: Option<String>,

    /// Seconds to wait after each translation request (overrides config file)
    #[arg(long)]
    pub delay_secs: Option<u64>,
}

#[derive(Debug, Args)]
pub struct RunCommand {
    #[command(flatten)]
    pub common: CommonArgs,
    #[command(flatten)]
    pub translate: TranslateArgs,
}

#[derive(Debug, Args)]
pub struct ExtractCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct TranslateCommand {
    #[command(flatten)]
    pub common: CommonArgs,
    #[command(flatten)]
    pub translate: TranslateArgs,
}

#[derive(Debug, Args)]
pub struct CompileCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Languages to compile (default: config file languages)
    #[arg(long, value_delimiter = ',')]
    pub languages: Vec<String>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract strings, write the POT template and translate it into every language
    Run(RunCommand),
    /// Extract strings and write the POT template only
    Extract(ExtractCommand),
    /// Translate an existing POT template into PO/MO catalogs
    Translate(TranslateCommand),
    /// Recompile MO files from existing PO files
    Compile(CompileCommand),
    /// Initialize a new .l10nrc.json configuration file
    Init,
}

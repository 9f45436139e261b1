use std::path::PathBuf;

use crate::cli::exit_status::ExitStatus;
use crate::core::{catalog::writer::CatalogPaths, pipeline::LanguageOutput};

#[derive(Debug)]
pub enum CommandSummary {
    Run(ExtractSummary, TranslateSummary),
    Extract(ExtractSummary),
    Translate(TranslateSummary),
    Compile(CompileSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct ExtractSummary {
    pub string_count: usize,
    pub files_scanned: usize,
    pub ignored_files: usize,
    pub project_version: String,
    pub pot_file: PathBuf,
}

#[derive(Debug)]
pub enum TranslateSummary {
    Completed {
        entry_count: usize,
        languages: Vec<LanguageOutput>,
    },
    Skipped,
}

impl TranslateSummary {
    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped)
    }
}

#[derive(Debug)]
pub struct CompiledCatalog {
    pub language: String,
    pub translated: usize,
    pub paths: CatalogPaths,
}

#[derive(Debug)]
pub struct CompileSummary {
    pub compiled: Vec<CompiledCatalog>,
    /// Languages with no `.po` file in the output directory.
    pub missing: Vec<PathBuf>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub path: PathBuf,
}

/// Result of running l10n commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub status: ExitStatus,
}

impl CommandResult {
    pub fn new(summary: CommandSummary) -> Self {
        let skipped = match &summary {
            CommandSummary::Run(_, translate) | CommandSummary::Translate(translate) => {
                translate.is_skipped()
            }
            _ => false,
        };
        Self {
            summary,
            status: if skipped {
                ExitStatus::Skipped
            } else {
                ExitStatus::Success
            },
        }
    }
}

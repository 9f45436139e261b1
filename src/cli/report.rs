//! Final summary printed to stdout once a command succeeds.
//!
//! Progress is logged through `tracing` on stderr while the pipeline runs;
//! this module only renders the outcome.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{
    CommandResult, CommandSummary, CompileSummary, ExtractSummary, InitSummary, TranslateSummary,
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Warning mark for stages that did not run.
pub const WARNING_MARK: &str = "\u{26a0}"; // ⚠

pub fn print(result: &CommandResult) {
    print_to(result, &mut io::stdout().lock());
}

/// Print the summary to a custom writer.
pub fn print_to<W: Write>(result: &CommandResult, writer: &mut W) {
    match &result.summary {
        CommandSummary::Run(extract, translate) => {
            print_extract(extract, writer);
            print_translate(translate, writer);
        }
        CommandSummary::Extract(summary) => print_extract(summary, writer),
        CommandSummary::Translate(summary) => print_translate(summary, writer),
        CommandSummary::Compile(summary) => print_compile(summary, writer),
        CommandSummary::Init(summary) => print_init(summary, writer),
    }
}

fn plural(count: usize, one: &str, many: &str) -> String {
    format!("{} {}", count, if count == 1 { one } else { many })
}

fn print_extract<W: Write>(summary: &ExtractSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Extracted {} from {} (version {})",
            plural(summary.string_count, "string", "strings"),
            plural(summary.files_scanned, "file", "files"),
            summary.project_version
        )
        .green()
    );
    if summary.ignored_files > 0 {
        let _ = writeln!(
            writer,
            "  {} ignored",
            plural(summary.ignored_files, "file", "files")
        );
    }
    let _ = writeln!(writer, "  {} {}", "-->".blue(), summary.pot_file.display());
}

fn print_translate<W: Write>(summary: &TranslateSummary, writer: &mut W) {
    match summary {
        TranslateSummary::Skipped => {
            let _ = writeln!(
                writer,
                "{} {} (set {} or pass {})",
                WARNING_MARK.yellow(),
                "Translation skipped: no API key".yellow().bold(),
                "OPENAI_API_KEY".cyan(),
                "--api-key".cyan()
            );
        }
        TranslateSummary::Completed {
            entry_count,
            languages,
        } => {
            let _ = writeln!(
                writer,
                "{} {}",
                SUCCESS_MARK.green(),
                format!(
                    "Translated {} into {}",
                    plural(*entry_count, "string", "strings"),
                    plural(languages.len(), "language", "languages")
                )
                .green()
            );
            for output in languages {
                let _ = writeln!(
                    writer,
                    "  {} {} ({}): {}, {}",
                    "-->".blue(),
                    output.language.tag().bold(),
                    output.language.name(),
                    output.paths.po.display(),
                    output.paths.mo.display()
                );
            }
        }
    }
}

fn print_compile<W: Write>(summary: &CompileSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Compiled {}",
            plural(summary.compiled.len(), "catalog", "catalogs")
        )
        .green()
    );
    for catalog in &summary.compiled {
        let _ = writeln!(
            writer,
            "  {} {}: {} ({} translated)",
            "-->".blue(),
            catalog.language.bold(),
            catalog.paths.mo.display(),
            catalog.translated
        );
    }
    for path in &summary.missing {
        let _ = writeln!(
            writer,
            "{} not found: {}",
            "warning:".bold().yellow(),
            path.display()
        );
    }
}

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", summary.path.display()).green()
    );
}

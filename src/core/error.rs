//! Error taxonomy for the localization pipeline.
//!
//! Precondition failures (missing source root, unresolved version, missing
//! template) and external translation failures are both fatal for a run.
//! A missing API key is not an error: it yields
//! [`TranslationOutcome::Skipped`](crate::core::pipeline::TranslationOutcome).

use std::{io, path::PathBuf};

use thiserror::Error;

use crate::core::translate::TranslateError;
use crate::core::version::VersionError;

#[derive(Debug, Error)]
pub enum L10nError {
    #[error("source directory not found: {}", .0.display())]
    SourceDirMissing(PathBuf),

    #[error(transparent)]
    Version(#[from] VersionError),

    #[error("template catalog not found: {} (run `l10n extract` first)", .0.display())]
    TemplateMissing(PathBuf),

    #[error("invalid extraction pattern")]
    Pattern(#[from] regex::Error),

    #[error("cannot traverse {}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("cannot read source file {}", path.display())]
    ReadSource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot parse catalog {}", path.display())]
    ParseCatalog {
        path: PathBuf,
        #[source]
        source: polib::po_file::POParseError,
    },

    #[error("invalid catalog header")]
    Header(#[from] polib::metadata::MetadataParseError),

    #[error("catalog {} has no `{field}` header field", path.display())]
    HeaderFieldMissing { path: PathBuf, field: &'static str },

    #[error("expected {expected} translations, got {actual}")]
    TranslationCount { expected: usize, actual: usize },

    #[error("translating {text:?} to {language} failed")]
    Translation {
        language: String,
        text: String,
        #[source]
        source: TranslateError,
    },
}

//! Localization pipeline.
//!
//! ## Module Structure
//!
//! - `context`: merged configuration and resolved paths for a run
//! - `version`: project version lookup from an INI file
//! - `file_scanner`: source tree traversal
//! - `extract`: translatable string extraction
//! - `catalog`: template and per-language catalogs, PO/MO persistence
//! - `language`: target language tags and display names
//! - `translate`: machine translation with request throttling
//! - `pipeline`: the extract and translate stages wired together
//! - `error`: error types shared by the stages

pub mod catalog;
pub mod context;
pub mod error;
pub mod extract;
pub mod file_scanner;
pub mod language;
pub mod pipeline;
pub mod translate;
pub mod version;

pub use error::L10nError;

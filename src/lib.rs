//! l10nctl - gettext catalog pipeline for WordPress-style PHP plugins
//!
//! Scans PHP sources for translatable strings scoped to the plugin's domain,
//! writes a POT template, machine-translates it into each target language and
//! writes the resulting PO/MO catalogs.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing, commands, reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction, catalogs and translation
//! - `logging`: Diagnostic output setup

pub mod cli;
pub mod config;
pub mod core;
pub mod logging;

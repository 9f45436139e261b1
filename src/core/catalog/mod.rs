//! Message catalogs: the template built from extracted strings and the
//! per-language catalogs derived from it.
//!
//! ## Module Structure
//!
//! - `po`: conversion to and from gettext PO/MO files
//! - `writer`: per-language artifact naming and persistence

pub mod po;
pub mod writer;

use chrono::{DateTime, Utc};

use crate::core::{error::L10nError, extract::TranslatableString, language::TargetLanguage};

pub const CONTENT_TYPE: &str = "text/plain; charset=UTF-8";
pub const SOURCE_LANGUAGE: &str = "en";
pub const SOURCE_LANGUAGE_TEAM: &str = "English";
/// Two forms: singular when `n == 1`, plural otherwise.
pub const PLURAL_FORMS: &str = "nplurals=2; plural=(n != 1);";
/// Conventional placeholder for a template that has never been revised.
pub const UNREVISED_DATE: &str = "YEAR-MO-DA HO:MI+ZONE";

/// Render a timestamp the way catalog headers store it.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M:%S+0000").to_string()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogHeader {
    pub project_version: String,
    pub language: String,
    pub language_team: String,
    pub creation_date: String,
    pub revision_date: String,
    /// Maintainer contact; written as `Report-Msgid-Bugs-To` and
    /// `Last-Translator`.
    pub contact: String,
    pub plural_forms: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub source: String,
    /// Empty in the template.
    pub translation: String,
    /// Relative path of the file the source string was first seen in.
    pub provenance: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub header: CatalogHeader,
    pub entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Build the untranslated template from extraction results.
    pub fn template(
        strings: &[TranslatableString],
        project_version: &str,
        contact: &str,
        created_at: DateTime<Utc>,
    ) -> Self {
        let entries = strings
            .iter()
            .map(|s| CatalogEntry {
                source: s.text.clone(),
                translation: String::new(),
                provenance: s.location.to_string(),
            })
            .collect();

        Self {
            header: CatalogHeader {
                project_version: project_version.to_string(),
                language: SOURCE_LANGUAGE.to_string(),
                language_team: SOURCE_LANGUAGE_TEAM.to_string(),
                creation_date: format_timestamp(created_at),
                revision_date: UNREVISED_DATE.to_string(),
                contact: contact.to_string(),
                plural_forms: PLURAL_FORMS.to_string(),
            },
            entries,
        }
    }

    /// Derive a catalog for `language`, pairing each entry with the
    /// translation at the same position.
    ///
    /// Fails unless `translations` has exactly one item per entry.
    pub fn localized(
        &self,
        language: &TargetLanguage,
        translations: Vec<String>,
        revised_at: DateTime<Utc>,
    ) -> Result<Self, L10nError> {
        if translations.len() != self.entries.len() {
            return Err(L10nError::TranslationCount {
                expected: self.entries.len(),
                actual: translations.len(),
            });
        }

        let entries = self
            .entries
            .iter()
            .zip(translations)
            .map(|(entry, translation)| CatalogEntry {
                source: entry.source.clone(),
                translation,
                provenance: entry.provenance.clone(),
            })
            .collect();

        Ok(Self {
            header: CatalogHeader {
                language: language.tag().to_string(),
                language_team: language.name().to_string(),
                revision_date: format_timestamp(revised_at),
                ..self.header.clone()
            },
            entries,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn translated_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| !e.translation.is_empty())
            .count()
    }
}

//! Translatable string extraction.
//!
//! Source files are matched with a regular expression that recognises calls
//! such as `__('Text', Strings::Domain)` or `esc_html_e("Text", Strings::Domain)`:
//! a marker function, a quoted literal, then the project's domain token as the
//! second argument. Calls with any other second argument are ignored.
//!
//! Each distinct string is recorded once, under the first file (in traversal
//! order) that contains it.

use std::{
    collections::HashSet,
    fmt, fs,
    path::{Path, PathBuf},
};

use regex::Regex;

use crate::core::error::L10nError;

/// Where a string was first seen, relative to the scanned source root.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceLocation(PathBuf);

impl SourceLocation {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for SourceLocation {
    /// Always uses `/` so catalogs are identical across platforms.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<_> = self
            .0
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect();
        write!(f, "{}", rendered.join("/"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatableString {
    pub text: String,
    pub location: SourceLocation,
}

/// Compiled matcher for marker calls scoped to one domain token.
#[derive(Debug, Clone)]
pub struct ExtractionRules {
    pattern: Regex,
}

impl ExtractionRules {
    pub fn new(markers: &[String], domain_token: &str) -> Result<Self, L10nError> {
        let markers = markers
            .iter()
            .map(|m| regex::escape(m))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = format!(
            r#"\b(?:{markers})\s*\(\s*(?:'((?:[^'\\]|\\[\s\S])*)'|"((?:[^"\\]|\\[\s\S])*)")\s*,\s*{domain}\s*[,)]"#,
            domain = regex::escape(domain_token.trim()),
        );
        Ok(Self {
            pattern: Regex::new(&pattern)?,
        })
    }

    /// Candidate strings in `content`, unescaped and trimmed, empties dropped.
    pub fn strings_in<'a>(&'a self, content: &'a str) -> impl Iterator<Item = String> + 'a {
        self.pattern.captures_iter(content).filter_map(|caps| {
            let text = if let Some(single) = caps.get(1) {
                unescape_single_quoted(single.as_str())
            } else {
                unescape_double_quoted(caps.get(2)?.as_str())
            };
            let text = text.trim();
            (!text.is_empty()).then(|| text.to_string())
        })
    }
}

/// Ordered, first-wins collection of extracted strings.
#[derive(Debug, Default)]
pub struct Extraction {
    strings: Vec<TranslatableString>,
    seen: HashSet<String>,
    pub files_scanned: usize,
}

impl Extraction {
    /// Record `text` unless it was already seen. Returns whether it was new.
    pub fn insert(&mut self, text: String, location: &SourceLocation) -> bool {
        if self.seen.contains(&text) {
            return false;
        }
        self.seen.insert(text.clone());
        self.strings.push(TranslatableString {
            text,
            location: location.clone(),
        });
        true
    }

    pub fn strings(&self) -> &[TranslatableString] {
        &self.strings
    }

    pub fn into_strings(self) -> Vec<TranslatableString> {
        self.strings
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

/// Extract strings from `files`, recording locations relative to `root`.
///
/// A file that cannot be read (including invalid UTF-8) fails the whole run.
pub fn extract_strings(
    root: &Path,
    files: &[PathBuf],
    rules: &ExtractionRules,
) -> Result<Extraction, L10nError> {
    let mut extraction = Extraction::default();

    for file in files {
        let content = fs::read_to_string(file).map_err(|source| L10nError::ReadSource {
            path: file.clone(),
            source,
        })?;
        let location = SourceLocation::new(file.strip_prefix(root).unwrap_or(file));

        let mut added = 0usize;
        for text in rules.strings_in(&content) {
            if extraction.insert(text, &location) {
                added += 1;
            }
        }
        extraction.files_scanned += 1;

        if added > 0 {
            tracing::debug!(file = %location, count = added, "extracted strings");
        }
    }

    Ok(extraction)
}

fn unescape_single_quoted(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\'
            && let Some(&next) = chars.peek()
            && (next == '\'' || next == '\\')
        {
            out.push(next);
            chars.next();
            continue;
        }
        out.push(c);
    }
    out
}

fn unescape_double_quoted(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let replacement = match chars.peek().copied() {
            Some('n') => Some('\n'),
            Some('t') => Some('\t'),
            Some('r') => Some('\r'),
            Some('v') => Some('\u{0B}'),
            Some('f') => Some('\u{0C}'),
            Some('e') => Some('\u{1B}'),
            Some(other @ ('\\' | '$' | '"')) => Some(other),
            _ => None,
        };
        match replacement {
            Some(r) => {
                out.push(r);
                chars.next();
            }
            None => out.push(c),
        }
    }
    out
}

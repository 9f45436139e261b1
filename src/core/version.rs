//! Project version lookup from an INI-style file such as `.bumpversion.cfg`.
//!
//! The reader follows Python `configparser` conventions closely enough for
//! bumpversion files: section names are case-sensitive, keys are not, a key
//! ends at the first `=` or `:`, `#`/`;` start comment lines, and indented
//! lines continue the previous value.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum VersionError {
    #[error("config file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("cannot read config file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{key} not found in section [{section}] of {}", path.display())]
    KeyNotFound {
        path: PathBuf,
        section: String,
        key: String,
    },
}

/// Read `[section] key` from the INI file at `path`.
///
/// An empty value is reported as [`VersionError::KeyNotFound`].
pub fn resolve_project_version(
    path: &Path,
    section: &str,
    key: &str,
) -> Result<String, VersionError> {
    if !path.is_file() {
        return Err(VersionError::FileNotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path).map_err(|source| VersionError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    match read_ini_value(&content, section, key) {
        Some(value) if !value.is_empty() => {
            tracing::debug!(path = %path.display(), version = %value, "resolved project version");
            Ok(value)
        }
        _ => Err(VersionError::KeyNotFound {
            path: path.to_path_buf(),
            section: section.to_string(),
            key: key.to_string(),
        }),
    }
}

/// Look up a value in INI text. Returns the first match.
pub fn read_ini_value(content: &str, section: &str, key: &str) -> Option<String> {
    let key = key.to_lowercase();
    let mut in_section = false;
    let mut found: Option<String> = None;

    for raw in content.lines() {
        let trimmed = raw.trim();

        if found.is_some() {
            // Continuation lines are indented and non-empty.
            if !trimmed.is_empty()
                && raw.starts_with(char::is_whitespace)
                && !is_comment(trimmed)
            {
                if let Some(value) = found.as_mut() {
                    value.push('\n');
                    value.push_str(trimmed);
                }
                continue;
            }
            break;
        }

        if trimmed.is_empty() || is_comment(trimmed) {
            continue;
        }

        if let Some(name) = trimmed
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
        {
            in_section = name.trim() == section;
            continue;
        }

        if !in_section {
            continue;
        }

        if let Some((name, value)) = split_option(trimmed)
            && name.to_lowercase() == key
        {
            found = Some(value.to_string());
        }
    }

    found
}

fn is_comment(line: &str) -> bool {
    line.starts_with('#') || line.starts_with(';')
}

/// Split `name = value` / `name: value` at whichever delimiter comes first.
fn split_option(line: &str) -> Option<(&str, &str)> {
    let idx = line.find(['=', ':'])?;
    let name = line[..idx].trim();
    if name.is_empty() {
        return None;
    }
    Some((name, line[idx + 1..].trim()))
}

//! Conversion between [`Catalog`] and gettext files via `polib`.

use std::{fs, io, path::Path};

use polib::{
    catalog::Catalog as PoCatalog,
    message::{Message, MessageView},
    metadata::CatalogMetadata,
    mo_file, po_file,
};

use super::{CONTENT_TYPE, Catalog, CatalogEntry, CatalogHeader};
use crate::core::error::L10nError;

/// Header fields `polib` cannot parse a catalog without.
const REQUIRED_HEADER_FIELDS: [&str; 9] = [
    "Project-Id-Version",
    "POT-Creation-Date",
    "PO-Revision-Date",
    "Language-Team",
    "MIME-Version",
    "Content-Type",
    "Content-Transfer-Encoding",
    "Language",
    "Plural-Forms",
];

/// Render the header entry. Every field `polib` requires is present.
pub fn render_header(header: &CatalogHeader) -> String {
    format!(
        "Project-Id-Version: {}\n\
         POT-Creation-Date: {}\n\
         PO-Revision-Date: {}\n\
         Last-Translator: {}\n\
         Language-Team: {}\n\
         MIME-Version: 1.0\n\
         Content-Type: {}\n\
         Content-Transfer-Encoding: 8bit\n\
         Language: {}\n\
         Plural-Forms: {}\n",
        header.project_version,
        header.creation_date,
        header.revision_date,
        header.contact,
        header.language_team,
        CONTENT_TYPE,
        header.language,
        header.plural_forms,
    )
}

fn to_po_catalog(catalog: &Catalog, translated_only: bool) -> Result<PoCatalog, L10nError> {
    let metadata = CatalogMetadata::parse(&render_header(&catalog.header))?;
    let mut po = PoCatalog::new(metadata);

    for entry in &catalog.entries {
        if translated_only && entry.translation.is_empty() {
            continue;
        }
        po.append_or_update(
            Message::build_singular()
                .with_comments(entry.provenance.clone())
                .with_msgid(entry.source.clone())
                .with_msgstr(entry.translation.clone())
                .done(),
        );
    }

    Ok(po)
}

fn from_po_catalog(po: &PoCatalog) -> Catalog {
    let metadata = &po.metadata;
    let header = CatalogHeader {
        project_version: metadata.project_id_version.clone(),
        language: metadata.language.clone(),
        language_team: metadata.language_team.clone(),
        creation_date: metadata.pot_creation_date.clone(),
        revision_date: metadata.po_revision_date.clone(),
        contact: metadata.last_translator.clone(),
        plural_forms: metadata.plural_rules.dump(),
    };

    // Plural messages are never produced by extraction; skip hand-added ones.
    let entries = po
        .messages()
        .filter(|m| m.is_singular())
        .map(|m| CatalogEntry {
            source: m.msgid().to_string(),
            translation: m.msgstr().unwrap_or("").to_string(),
            provenance: m.comments().to_string(),
        })
        .collect();

    Catalog { header, entries }
}

fn ensure_parent_dir(path: &Path) -> Result<(), L10nError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| L10nError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

fn escape_header_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

/// `polib` drops `Report-Msgid-Bugs-To`, so it is spliced into the written
/// header right before `POT-Creation-Date`, where gettext tools put it.
fn insert_report_address(path: &Path, contact: &str) -> io::Result<()> {
    let mut content = fs::read_to_string(path)?;
    if let Some(at) = content.find("\"POT-Creation-Date: ") {
        let line = format!(
            "\"Report-Msgid-Bugs-To: {}\\n\"\n",
            escape_header_value(contact)
        );
        content.insert_str(at, &line);
        fs::write(path, content)?;
    }
    Ok(())
}

/// Write `catalog` as an editable PO/POT file, replacing any existing file.
pub fn write_po(catalog: &Catalog, path: &Path) -> Result<(), L10nError> {
    ensure_parent_dir(path)?;
    let po = to_po_catalog(catalog, false)?;
    po_file::write(&po, path)
        .and_then(|()| insert_report_address(path, &catalog.header.contact))
        .map_err(|source| L10nError::Write {
            path: path.to_path_buf(),
            source,
        })
}

/// Write `catalog` as a binary MO file. Untranslated entries are left out.
pub fn write_mo(catalog: &Catalog, path: &Path) -> Result<(), L10nError> {
    ensure_parent_dir(path)?;
    let po = to_po_catalog(catalog, true)?;
    mo_file::write(&po, path).map_err(|source| L10nError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// First field `polib` requires that the leading `msgid ""` header entry
/// lacks. `None` when every field is present or there is no header entry,
/// which `polib` reports itself.
fn missing_header_field(content: &str) -> Option<&'static str> {
    let mut lines = content
        .lines()
        .map(str::trim)
        .skip_while(|line| line.is_empty() || line.starts_with('#'));
    if lines.next()? != r#"msgid """# {
        return None;
    }
    let mut lines = lines.skip_while(|line| *line == r#""""#);
    let first = lines.next()?.strip_prefix("msgstr ")?;

    let mut raw = String::new();
    for line in std::iter::once(first).chain(lines.take_while(|line| line.starts_with('"'))) {
        raw.push_str(line.strip_prefix('"')?.strip_suffix('"')?);
    }
    let present: Vec<&str> = raw
        .split("\\n")
        .filter_map(|field| field.split_once(':'))
        .map(|(name, _)| name)
        .collect();

    REQUIRED_HEADER_FIELDS
        .into_iter()
        .find(|required| !present.contains(required))
}

/// Read a PO/POT file written by this tool or by standard gettext tooling.
///
/// A header lacking one of the fields `polib` requires is reported as
/// [`L10nError::HeaderFieldMissing`].
pub fn read_po(path: &Path) -> Result<Catalog, L10nError> {
    if let Ok(content) = fs::read_to_string(path)
        && let Some(field) = missing_header_field(&content)
    {
        return Err(L10nError::HeaderFieldMissing {
            path: path.to_path_buf(),
            field,
        });
    }

    let po = po_file::parse(path).map_err(|source| L10nError::ParseCatalog {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(from_po_catalog(&po))
}

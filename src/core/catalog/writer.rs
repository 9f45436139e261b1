use std::{
    fs,
    path::{Path, PathBuf},
};

use super::{
    Catalog,
    po::{write_mo, write_po},
};
use crate::core::error::L10nError;

/// Paths of the two artifacts written for one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogPaths {
    pub po: PathBuf,
    pub mo: PathBuf,
}

/// `{plugin_slug}-{language}.{extension}`
pub fn catalog_file_name(plugin_slug: &str, language: &str, extension: &str) -> String {
    format!("{plugin_slug}-{language}.{extension}")
}

pub fn catalog_paths(output_dir: &Path, plugin_slug: &str, language: &str) -> CatalogPaths {
    CatalogPaths {
        po: output_dir.join(catalog_file_name(plugin_slug, language, "po")),
        mo: output_dir.join(catalog_file_name(plugin_slug, language, "mo")),
    }
}

/// Persist a translated catalog as `.po` and `.mo` under `output_dir`.
///
/// Files are overwritten in place; a crash mid-write can leave a truncated file.
pub fn write_localized_catalog(
    catalog: &Catalog,
    output_dir: &Path,
    plugin_slug: &str,
) -> Result<CatalogPaths, L10nError> {
    fs::create_dir_all(output_dir).map_err(|source| L10nError::Write {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let paths = catalog_paths(output_dir, plugin_slug, &catalog.header.language);
    write_po(catalog, &paths.po)?;
    write_mo(catalog, &paths.mo)?;

    tracing::info!(
        po = %paths.po.display(),
        mo = %paths.mo.display(),
        "Generated po and mo files"
    );
    Ok(paths)
}

/// Recompile an existing (possibly hand-edited) `.po` into its `.mo`.
pub fn compile_catalog(paths: &CatalogPaths) -> Result<usize, L10nError> {
    let catalog = super::po::read_po(&paths.po)?;
    write_mo(&catalog, &paths.mo)?;
    Ok(catalog.translated_count())
}

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    CatalogError, Result,
    catalog::{CatalogAssembler, StringCatalog},
    config::CatalogConfig,
    loader::discover_locale_files,
    merger::{MergedLocales, merge_locales},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub output: PathBuf,
    pub entry_count: usize,
    pub locale_count: usize,
    pub source_file_count: usize,
}

/// Discover, merge and assemble, without touching the output file.
pub fn build_catalog(config: &CatalogConfig) -> Result<(StringCatalog, MergedLocales)> {
    let dirs = config.locale_dirs();
    let sources = discover_locale_files(&dirs);
    if sources.is_empty() {
        return Err(CatalogError::NoInputFiles(dirs));
    }

    let merged = merge_locales(&sources, &config.source_locale, &config.locale_prefix)?;
    let assembler = CatalogAssembler::new(config.reindexer());
    let catalog = assembler.assemble(&merged, &config.source_locale);
    Ok((catalog, merged))
}

/// Build the catalog and write it to `config.output`.
pub fn run_build(config: &CatalogConfig) -> Result<BuildReport> {
    let (catalog, merged) = build_catalog(config)?;
    write_catalog(&catalog, &config.output)?;

    Ok(BuildReport {
        output: config.output.clone(),
        entry_count: catalog.strings.len(),
        locale_count: merged.len(),
        source_file_count: merged.source().files.len(),
    })
}

/// Write to a sibling `.tmp` file, then rename it over `path`.
pub fn write_catalog(catalog: &StringCatalog, path: &Path) -> Result<()> {
    let text = catalog
        .to_json_pretty()
        .map_err(|e| CatalogError::Serialize(e.to_string()))?;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| CatalogError::io(parent, e))?;
    }

    let mut tmp_name = path.file_name().unwrap_or_default().to_os_string();
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);

    fs::write(&tmp_path, text).map_err(|e| CatalogError::io(&tmp_path, e))?;
    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(CatalogError::io(path, e));
    }

    log::info!("Wrote catalog to {:?}", path);
    Ok(())
}

use crate::config::ManifestConfig;
use crate::error::Result;
use log::warn;
use std::fs;
use std::path::Path;

/// Lists the names of all regular files in `dir`.
///
/// Subdirectories and other special entries are skipped. Filenames that are
/// not valid UTF-8 cannot appear in the manifest and are skipped with a
/// warning.
pub fn scan_directory(dir: &Path) -> Result<Vec<String>> {
    let names = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter_map(
            |path| match path.file_name().and_then(|name| name.to_str()) {
                Some(name) => Some(name.to_string()),
                None => {
                    warn!("Skipping non-UTF-8 filename: {:?}", path);
                    None
                }
            },
        )
        .collect();

    Ok(names)
}

/// Checks whether a filename's extension (the full suffix after the final
/// `.`, case-insensitive) is on the configured allowlist.
pub fn is_supported_media(name: &str, config: &ManifestConfig) -> bool {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext_str| {
            let ext_lower = ext_str.to_lowercase();
            config.extensions.iter().any(|ext| *ext == ext_lower)
        })
        .unwrap_or(false)
}

fn is_excluded(name: &str, config: &ManifestConfig) -> bool {
    let name_lower = name.to_lowercase();
    config.excluded_files.iter().any(|excluded| *excluded == name_lower)
}

/// Keeps the filenames whose extension is allowlisted and whose full name
/// (case-insensitive) is not on the denylist.
pub fn filter_filenames(names: Vec<String>, config: &ManifestConfig) -> Vec<String> {
    names
        .into_iter()
        .filter(|name| is_supported_media(name, config) && !is_excluded(name, config))
        .collect()
}

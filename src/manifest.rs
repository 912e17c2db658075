//! Manifest generation: scan, filter, sort, write.

use crate::config::ManifestConfig;
use crate::error::{AppError, Result};
use crate::file_utils;
use crate::sort_key;
use log::debug;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Header line of the manifest file.
const HEADER: &str = "Filename";

/// Writes the header and one filename per line, truncating any existing file.
fn write_manifest(path: &Path, filenames: &[String]) -> Result<()> {
    let file =
        File::create(path).map_err(|e| AppError::ManifestWrite(format!("{:?}: {}", path, e)))?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "{}", HEADER).map_err(|e| AppError::ManifestWrite(e.to_string()))?;
    for name in filenames {
        writeln!(writer, "{}", name).map_err(|e| AppError::ManifestWrite(e.to_string()))?;
    }
    writer
        .flush()
        .map_err(|e| AppError::ManifestWrite(e.to_string()))
}

/// Generates the manifest for `dir` and returns the number of rows written.
///
/// Scans the directory, filters filenames against the configured allowlist
/// and denylist, sorts them descending, and writes the result to the
/// configured output file inside `dir`.
pub fn generate(dir: &Path, config: &ManifestConfig) -> Result<usize> {
    let names = file_utils::scan_directory(dir)?;
    debug!("Scanned {} regular files in {:?}", names.len(), dir);

    let filtered = file_utils::filter_filenames(names, config);
    debug!("{} files passed the extension filter", filtered.len());

    let sorted = sort_key::sort_descending(filtered);
    write_manifest(&dir.join(&config.output_file), &sorted)?;

    Ok(sorted.len())
}

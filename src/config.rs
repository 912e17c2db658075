//! Configuration constants and the manifest generator configuration.

use std::path::PathBuf;

/// Supported media file extensions for scanning directories.
pub const SUPPORTED_MEDIA_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "mp4", "webm", "gif"];

/// Filenames always excluded from the manifest, regardless of extension.
pub const EXCLUDED_FILENAMES: [&str; 2] = ["icon.png", "icon_512.png"];

/// Name of the generated manifest file.
pub const OUTPUT_FILE: &str = "lot.csv";

/// Configuration for one manifest generation run.
///
/// Extensions and excluded filenames are compared case-insensitively;
/// both lists are held lowercase.
#[derive(Debug)]
pub struct ManifestConfig {
    /// Permitted extensions, lowercase, without the leading dot.
    pub extensions: Vec<String>,
    /// Full filenames to drop, lowercase.
    pub excluded_files: Vec<String>,
    /// Manifest filename, created in the scanned directory.
    pub output_file: PathBuf,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            extensions: SUPPORTED_MEDIA_EXTENSIONS
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            excluded_files: EXCLUDED_FILENAMES
                .iter()
                .map(|name| name.to_string())
                .collect(),
            output_file: PathBuf::from(OUTPUT_FILE),
        }
    }
}

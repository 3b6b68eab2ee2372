use std::ffi::OsString;
use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{DeflickerError, Result};
use crate::picture::Picture;

/// File extensions the pipeline accepts, lowercase.
const SUPPORTED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Enumerate the source directory and build the picture sequence.
///
/// Files are taken in file-name order, which fixes every picture's
/// sequence position for the rolling-average windows. Files with
/// unsupported extensions are logged and skipped. The destination
/// directory is created if it does not exist.
pub fn discover_pictures(source: &Path, destination: &Path) -> Result<Vec<Picture>> {
    let entries = fs::read_dir(source).map_err(|e| DeflickerError::Discovery {
        path: source.to_path_buf(),
        source: e,
    })?;

    let mut names: Vec<OsString> = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| DeflickerError::Discovery {
            path: source.to_path_buf(),
            source: e,
        })?;
        names.push(entry.file_name());
    }
    names.sort();

    fs::create_dir_all(destination).map_err(|e| DeflickerError::Discovery {
        path: destination.to_path_buf(),
        source: e,
    })?;

    let mut pictures = Vec::new();
    for name in names {
        let source_path = source.join(&name);
        if has_supported_extension(&source_path) {
            pictures.push(Picture::new(source_path, destination.join(&name)));
        } else {
            warn!(
                path = %source_path.display(),
                "ignoring file with unsupported extension"
            );
        }
    }
    debug!(count = pictures.len(), "picture sequence built");
    Ok(pictures)
}

fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| SUPPORTED_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

//! Directory listing for templates and produced assets.
//!
//! Both listings are flat (no recursion) and sorted by filename so that a
//! run over the same directory always visits files in the same order.

use std::path::Path;

use walkdir::WalkDir;

use crate::error::{IconError, Result};

/// Extension of vector templates.
pub const TEMPLATE_EXTENSION: &str = "svg";

/// List the regular files directly inside `dir`, sorted by name.
///
/// A missing or unreadable directory is an error, and so is a file whose
/// name is not UTF-8.
pub fn list_files(dir: &Path) -> Result<Vec<String>> {
    if !dir.is_dir() {
        return Err(IconError::Io {
            path: dir.to_path_buf(),
            message: "Directory not found".to_string(),
        });
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| IconError::Io {
            path: dir.to_path_buf(),
            message: format!("Failed to list directory: {}", e),
        })?;

        // Symlinks count as the file they point to
        if !entry.path().is_file() {
            continue;
        }

        let name = entry.file_name().to_str().ok_or_else(|| IconError::Io {
            path: entry.path().to_path_buf(),
            message: "File name is not valid UTF-8".to_string(),
        })?;
        files.push(name.to_string());
    }

    Ok(files)
}

/// List SVG template filenames in `dir`.
pub fn scan_templates(dir: &Path) -> Result<Vec<String>> {
    let suffix = format!(".{}", TEMPLATE_EXTENSION);
    Ok(list_files(dir)?
        .into_iter()
        .filter(|name| name.ends_with(&suffix))
        .collect())
}

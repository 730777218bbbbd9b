//! Project discovery: configuration lookup and directory scanning.
//!
//! A project is a directory that may contain an `iconset.yaml`. Without one,
//! the conventional layout from [`Config::default`] applies.
//!
//! # Example
//!
//! ```ignore
//! use iconset::discovery::discover;
//!
//! let project = discover("./qdarkstyle")?;
//! println!("Templates in {}", project.config.templates.display());
//! ```

mod config;
mod scanner;

use std::path::{Path, PathBuf};

use crate::error::Result;

pub use config::{resource_dir, Config};
pub use scanner::{list_files, scan_templates, TEMPLATE_EXTENSION};

/// The name of the configuration file.
pub const CONFIG_FILENAME: &str = "iconset.yaml";

/// A discovered project.
#[derive(Debug)]
pub struct Project {
    /// The project root directory.
    pub root: PathBuf,

    /// Configuration with paths rebased onto `root`.
    pub config: Config,
}

/// Discover a project rooted at `root`.
pub fn discover(root: impl AsRef<Path>) -> Result<Project> {
    let root = root.as_ref().to_path_buf();
    let config_path = root.join(CONFIG_FILENAME);

    let config = if config_path.exists() {
        Config::load(&config_path)?
    } else {
        Config::default()
    };

    Ok(Project {
        config: config.rooted(&root),
        root,
    })
}

/// Load a project from an explicit config file; paths resolve against the
/// file's directory.
pub fn load_config(path: &Path) -> Result<Project> {
    let root = path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    let config = Config::load(path)?.rooted(&root);

    Ok(Project {
        root,
        config,
    })
}

//! Project configuration (iconset.yaml) parsing.
//!
//! Every field has a default, so an empty file (or no file at all)
//! describes the conventional layout: templates in `svg/`, icons in `rc/`.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{IconError, Result};
use crate::types::{Palette, SizeSpec};
use crate::validation::DEFAULT_PATTERN;

/// Project configuration loaded from iconset.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the SVG templates.
    pub templates: PathBuf,

    /// Directory the PNG icons are written to. Its basename is the
    /// resource directory stylesheets refer to (`/rc/...`).
    pub output: PathBuf,

    /// Directory for the palette swatch image.
    pub images: PathBuf,

    /// Stylesheet source scanned for icon references.
    pub stylesheet: PathBuf,

    /// Qt resource file written by `generate-manifest`.
    pub qrc: PathBuf,

    pub resource_prefix: String,
    pub style_prefix: String,

    /// Template base names that are never rendered.
    pub blacklist: Vec<String>,

    /// Builtin palette name or path to a palette YAML file.
    pub palette: String,

    /// Output sizes; the first one is the base size.
    pub sizes: Vec<SizeSpec>,

    /// Regex matching icon references in the stylesheet.
    pub reference_pattern: String,

    /// Seconds allowed for all renders of one command.
    pub render_timeout: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            templates: PathBuf::from("svg"),
            output: PathBuf::from("rc"),
            images: PathBuf::from("images"),
            stylesheet: PathBuf::from("_styles.scss"),
            qrc: PathBuf::from("style.qrc"),
            resource_prefix: "qss_icons".to_string(),
            style_prefix: "qdarkstyle".to_string(),
            blacklist: vec!["base_palette".to_string()],
            palette: "dark".to_string(),
            sizes: SizeSpec::defaults(),
            reference_pattern: DEFAULT_PATTERN.to_string(),
            render_timeout: None,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| IconError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse configuration from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        // serde_yaml rejects an empty document for a struct
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = serde_yaml::from_str(content).map_err(|e| IconError::Config {
            message: format!("Invalid config: {}", e),
            help: Some("Check iconset.yaml syntax".to_string()),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Check invariants serde cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.sizes.is_empty() {
            return Err(IconError::Config {
                message: "No output sizes configured".to_string(),
                help: Some("Add at least one entry under `sizes:`".to_string()),
            });
        }

        let mut suffixes = HashSet::new();
        for size in &self.sizes {
            if size.size == 0 {
                return Err(IconError::Config {
                    message: format!("Size for suffix '{}' must be positive", size.suffix),
                    help: None,
                });
            }
            if !suffixes.insert(size.suffix.as_str()) {
                return Err(IconError::Config {
                    message: format!("Duplicate size suffix '{}'", size.suffix),
                    help: Some("Each size needs its own suffix so filenames stay unique".to_string()),
                });
            }
        }

        Ok(())
    }

    /// Rebase every relative path onto `root`.
    pub fn rooted(mut self, root: &Path) -> Self {
        for path in [
            &mut self.templates,
            &mut self.output,
            &mut self.images,
            &mut self.stylesheet,
            &mut self.qrc,
        ] {
            if path.is_relative() {
                *path = root.join(&*path);
            }
        }

        // A palette is either a builtin name or a path to a YAML file
        if Palette::builtin(&self.palette).is_none() && Path::new(&self.palette).is_relative() {
            self.palette = root.join(&self.palette).to_string_lossy().into_owned();
        }
        self
    }

    pub fn render_timeout(&self) -> Option<Duration> {
        self.render_timeout.map(Duration::from_secs)
    }

    /// Basename of the output directory, used in stylesheet references.
    pub fn resource_dir(&self) -> String {
        resource_dir(&self.output)
    }
}

/// Basename of an output directory, e.g. `rc` for `qdarkstyle/rc`.
pub fn resource_dir(output: &Path) -> String {
    output
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

pub mod completions;
pub mod icons;
pub mod init;
pub mod manifest;
pub mod palette;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::discovery::{discover, load_config, Config};
use crate::error::Result;

/// iconset - Themed icon set and Qt resource generator
#[derive(Parser, Debug)]
#[command(name = "iconset")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Print per-file progress
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the palette swatch (palette.svg and palette.png)
    GeneratePaletteImage(palette::PaletteImageArgs),

    /// Render every template in every state and size, then check the stylesheet
    GenerateIconSet(icons::IconSetArgs),

    /// Write the Qt resource file listing the generated icons
    GenerateManifest(manifest::ManifestArgs),

    /// Initialize a project (generates iconset.yaml)
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Where to find the project configuration.
#[derive(Args, Debug, Clone)]
pub struct ProjectArgs {
    /// Project root (default: current directory)
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Explicit config file; paths in it resolve against its directory
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl ProjectArgs {
    pub fn load(&self) -> Result<Config> {
        let project = match &self.config {
            Some(path) => load_config(path)?,
            None => discover(&self.root)?,
        };
        Ok(project.config)
    }
}

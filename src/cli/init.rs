//! Init command implementation.
//!
//! Writes an `iconset.yaml` spelling out the default configuration.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::discovery::{scan_templates, Config, CONFIG_FILENAME};
use crate::error::{IconError, Result};
use crate::output::{display_path, plural, Printer};

/// Initialize a project by generating an iconset.yaml
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Project directory (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing iconset.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<PathBuf> {
    let config_path = args.path.join(CONFIG_FILENAME);

    if config_path.exists() && !args.force {
        return Err(IconError::Config {
            message: format!("{} already exists", CONFIG_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    let config = Config::default();
    let yaml = serde_yaml::to_string(&config).map_err(|e| IconError::Config {
        message: format!("Failed to serialize config: {}", e),
        help: None,
    })?;

    fs::write(&config_path, &yaml).map_err(|e| IconError::Io {
        path: config_path.clone(),
        message: format!("Failed to write config: {}", e),
    })?;

    let templates_dir = args.path.join(&config.templates);
    match scan_templates(&templates_dir) {
        Ok(templates) => printer.info(
            "Discovered",
            &format!(
                "{} in {}",
                plural(templates.len(), "template", "templates"),
                display_path(&templates_dir)
            ),
        ),
        Err(_) => printer.warning(
            "Missing",
            &format!("no template directory at {}", display_path(&templates_dir)),
        ),
    }

    printer.success("Created", &display_path(&config_path));

    Ok(config_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_init_creates_config() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("svg")).unwrap();
        fs::write(dir.path().join("svg/arrow.svg"), "<svg/>").unwrap();

        let path = run(
            InitArgs {
                path: dir.path().to_path_buf(),
                force: false,
            },
            &Printer::new(),
        )
        .unwrap();

        let written = Config::load(&path).unwrap();
        assert_eq!(written, Config::default());
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "output: custom").unwrap();

        let result = run(
            InitArgs {
                path: dir.path().to_path_buf(),
                force: false,
            },
            &Printer::new(),
        );

        assert!(matches!(result, Err(IconError::Config { .. })));
        assert_eq!(
            fs::read_to_string(dir.path().join(CONFIG_FILENAME)).unwrap(),
            "output: custom"
        );
    }

    #[test]
    fn test_init_force_overwrites() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "output: custom").unwrap();

        run(
            InitArgs {
                path: dir.path().to_path_buf(),
                force: true,
            },
            &Printer::new(),
        )
        .unwrap();

        let config = Config::load(&dir.path().join(CONFIG_FILENAME)).unwrap();
        assert_eq!(config.output, PathBuf::from("rc"));
    }
}

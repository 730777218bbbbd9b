use miette::Diagnostic;
use thiserror::Error;

/// Main error type for iconset operations
#[derive(Error, Diagnostic, Debug)]
pub enum IconError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(iconset::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Invalid template filename: {filename}")]
    #[diagnostic(
        code(iconset::template::filename),
        help("Template filenames must look like `name.svg` with exactly one '.'")
    )]
    InvalidFilenameFormat { filename: String },

    #[error("Palette '{palette}' is missing colour {field}")]
    #[diagnostic(code(iconset::palette::missing))]
    MissingPaletteField { palette: String, field: String },

    #[error("Render failed: {message}")]
    #[diagnostic(code(iconset::render))]
    RenderFailure { message: String },

    #[error("Parse error: {message}")]
    #[diagnostic(code(iconset::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Config error: {message}")]
    #[diagnostic(code(iconset::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, IconError>;

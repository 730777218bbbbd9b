//! iconset - Themed icon set generator
//!
//! A library for colouring SVG icon templates per interaction state,
//! rasterizing them at several sizes, listing them in a Qt resource file
//! and checking them against the stylesheet that uses them.

pub mod cli;
pub mod discovery;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod qrc;
pub mod render;
pub mod swatch;
pub mod types;
pub mod validation;

pub use discovery::{discover, Config, Project};
pub use error::{IconError, Result};
pub use pipeline::{AssetFailure, AssetPipeline, RunStats};
pub use qrc::{generate_manifest, render_manifest, write_manifest};
pub use render::{colorize, expand, Colorized, Rasterizer, RenderContext, SvgRasterizer};
pub use swatch::{generate_palette_image, PaletteImage};
pub use types::{Colour, Palette, SizeSpec, State, StateColours, StateVariant, Template};
pub use validation::{reconcile, MatchMode, ReferenceExtractor, ValidationResult};

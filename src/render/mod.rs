//! Rendering module for iconset.
//!
//! Turns SVG templates into coloured variants and rasterizes them to PNG.

mod colorize;
mod raster;
mod variants;

pub use colorize::{colorize, fill_palette_tokens, Colorized, PLACEHOLDER};
pub use raster::{Rasterizer, RenderContext, SvgRasterizer};
pub use variants::expand;

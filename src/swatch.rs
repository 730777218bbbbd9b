//! Palette swatch image.
//!
//! `base_palette.svg` names palette roles as `{{ ROLE }}` tokens. Filling
//! them in produces `palette.svg`, which is also rendered to `palette.png`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{IconError, Result};
use crate::render::{fill_palette_tokens, Rasterizer};
use crate::types::Palette;

/// Template filename for the swatch, looked up in the template directory.
pub const SWATCH_TEMPLATE: &str = "base_palette.svg";

/// Pixel size of the rendered swatch.
pub const SWATCH_SIZE: u32 = 4000;

/// Files written by [`generate_palette_image`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteImage {
    pub svg: PathBuf,
    pub png: PathBuf,
}

/// Fill the swatch template with `palette` and render it into `output_dir`.
pub fn generate_palette_image(
    template: &Path,
    output_dir: &Path,
    palette: &Palette,
    rasterizer: &dyn Rasterizer,
) -> Result<PaletteImage> {
    let source = fs::read_to_string(template).map_err(|e| IconError::Io {
        path: template.to_path_buf(),
        message: format!("Failed to read palette template: {}", e),
    })?;

    let svg = fill_palette_tokens(&source, palette.iter());

    fs::create_dir_all(output_dir).map_err(|e| IconError::Io {
        path: output_dir.to_path_buf(),
        message: format!("Failed to create image directory: {}", e),
    })?;

    let image = PaletteImage {
        svg: output_dir.join("palette.svg"),
        png: output_dir.join("palette.png"),
    };

    fs::write(&image.svg, &svg).map_err(|e| IconError::Io {
        path: image.svg.clone(),
        message: format!("Failed to write palette SVG: {}", e),
    })?;

    let png = rasterizer.rasterize(&svg, SWATCH_SIZE, SWATCH_SIZE)?;
    fs::write(&image.png, png).map_err(|e| IconError::Io {
        path: image.png.clone(),
        message: format!("Failed to write palette PNG: {}", e),
    })?;

    Ok(image)
}

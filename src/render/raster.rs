//! SVG to PNG rasterization.
//!
//! [`Rasterizer`] is the boundary to the rendering engine. [`SvgRasterizer`]
//! renders with resvg and encodes with `image`; tests substitute their own
//! implementations. [`RenderContext`] scopes a rasterizer to one batch and
//! enforces an optional deadline at every call.

use std::cell::Cell;
use std::io::Cursor;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use image::{ImageFormat, RgbaImage};
use resvg::{tiny_skia, usvg};

use crate::error::{IconError, Result};

/// Turns an SVG document into PNG bytes of the requested size.
pub trait Rasterizer {
    fn rasterize(&self, svg: &str, height: u32, width: u32) -> Result<Vec<u8>>;
}

/// resvg-backed rasterizer.
///
/// The document is scaled uniformly to fit the target and centred, so
/// square icons fill the whole image.
pub struct SvgRasterizer {
    /// Base directory for relative `xlink:href` resources.
    resources_dir: Option<PathBuf>,
}

impl SvgRasterizer {
    pub fn new() -> Self {
        Self {
            resources_dir: None,
        }
    }

    pub fn with_resources_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.resources_dir = Some(dir.into());
        self
    }
}

impl Default for SvgRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Rasterizer for SvgRasterizer {
    fn rasterize(&self, svg: &str, height: u32, width: u32) -> Result<Vec<u8>> {
        let options = usvg::Options {
            resources_dir: self.resources_dir.clone(),
            ..Default::default()
        };

        let tree = usvg::Tree::from_str(svg, &options).map_err(|e| IconError::RenderFailure {
            message: format!("Invalid SVG: {}", e),
        })?;

        let mut pixmap =
            tiny_skia::Pixmap::new(width, height).ok_or_else(|| IconError::RenderFailure {
                message: format!("Unsupported size {}x{}", width, height),
            })?;

        let size = tree.size();
        let scale = (width as f32 / size.width()).min(height as f32 / size.height());
        let tx = (width as f32 - size.width() * scale) / 2.0;
        let ty = (height as f32 - size.height() * scale) / 2.0;
        let transform = tiny_skia::Transform::from_row(scale, 0.0, 0.0, scale, tx, ty);

        resvg::render(&tree, transform, &mut pixmap.as_mut());

        encode_png(&pixmap)
    }
}

/// Convert a premultiplied pixmap to straight RGBA and encode it as PNG.
fn encode_png(pixmap: &tiny_skia::Pixmap) -> Result<Vec<u8>> {
    let mut rgba = Vec::with_capacity(pixmap.data().len());
    for pixel in pixmap.pixels() {
        let c = pixel.demultiply();
        rgba.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }

    let img = RgbaImage::from_raw(pixmap.width(), pixmap.height(), rgba).ok_or_else(|| {
        IconError::RenderFailure {
            message: "Pixel buffer does not match image size".to_string(),
        }
    })?;

    let mut cursor = Cursor::new(Vec::new());
    img.write_to(&mut cursor, ImageFormat::Png)
        .map_err(|e| IconError::RenderFailure {
            message: format!("Failed to encode PNG: {}", e),
        })?;

    Ok(cursor.into_inner())
}

/// A rasterizer acquired for one batch of renders.
///
/// Once the deadline passes every further call fails with `RenderFailure`,
/// so a slow engine costs the remaining assets instead of hanging the run.
pub struct RenderContext<R> {
    rasterizer: R,
    deadline: Option<Instant>,
    renders: Cell<usize>,
}

impl<R: Rasterizer> RenderContext<R> {
    /// Acquire a context. `timeout` bounds the whole batch.
    pub fn acquire(rasterizer: R, timeout: Option<Duration>) -> Self {
        Self {
            rasterizer,
            deadline: timeout.map(|t| Instant::now() + t),
            renders: Cell::new(0),
        }
    }

    /// Run `f` with a freshly acquired context, releasing it afterwards.
    pub fn scoped<T>(rasterizer: R, timeout: Option<Duration>, f: impl FnOnce(&Self) -> T) -> T {
        let context = Self::acquire(rasterizer, timeout);
        f(&context)
    }

    /// Number of successful renders through this context.
    pub fn renders(&self) -> usize {
        self.renders.get()
    }

    pub fn is_expired(&self) -> bool {
        self.deadline.is_some_and(|d| Instant::now() >= d)
    }
}

impl<R: Rasterizer> Rasterizer for RenderContext<R> {
    fn rasterize(&self, svg: &str, height: u32, width: u32) -> Result<Vec<u8>> {
        if self.is_expired() {
            return Err(IconError::RenderFailure {
                message: "render deadline exceeded".to_string(),
            });
        }

        let bytes = self.rasterizer.rasterize(svg, height, width)?;
        self.renders.set(self.renders.get() + 1);
        Ok(bytes)
    }
}

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::output::{display_path, Printer};
use crate::render::{RenderContext, SvgRasterizer};
use crate::swatch::{generate_palette_image, PaletteImage, SWATCH_TEMPLATE};
use crate::types::Palette;

use super::ProjectArgs;

/// Render the palette swatch
#[derive(Args, Debug)]
pub struct PaletteImageArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Palette: builtin name or path to a palette YAML file
    #[arg(long)]
    pub palette: Option<String>,

    /// Directory containing base_palette.svg
    #[arg(long)]
    pub templates: Option<PathBuf>,

    /// Directory for palette.svg and palette.png
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

pub fn run(args: PaletteImageArgs, printer: &Printer) -> Result<PaletteImage> {
    let config = args.project.load()?;
    let timeout = config.render_timeout();
    let palette = Palette::load(args.palette.as_deref().unwrap_or(&config.palette))?;
    let templates = args.templates.unwrap_or(config.templates);
    let template = templates.join(SWATCH_TEMPLATE);
    let output = args.output.unwrap_or(config.images);

    printer.status("Rendering", &format!("{} palette swatch", palette.name));
    printer.detail("Template", &display_path(&template));

    let rasterizer = SvgRasterizer::new().with_resources_dir(&templates);
    let image = RenderContext::scoped(rasterizer, timeout, |context| {
        generate_palette_image(&template, &output, &palette, context)
    })?;

    printer.success("Created", &display_path(&image.svg));
    printer.success("Created", &display_path(&image.png));

    Ok(image)
}

//! generate-icon-set command implementation.
//!
//! Renders every template in every state and size and reports how the
//! result lines up with the stylesheet.

use std::path::PathBuf;

use clap::Args;

use crate::error::{IconError, Result};
use crate::output::{display_path, plural, Printer};
use crate::pipeline::{AssetPipeline, RunStats};
use crate::render::{RenderContext, SvgRasterizer};
use crate::types::Palette;
use crate::validation::{print_diagnostics, MatchMode};

use super::ProjectArgs;

/// Render every template in every state and size
#[derive(Args, Debug)]
pub struct IconSetArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Palette: builtin name or path to a palette YAML file
    #[arg(long)]
    pub palette: Option<String>,

    /// Directory of SVG templates
    #[arg(long)]
    pub templates: Option<PathBuf>,

    /// Output directory for PNG icons
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Stylesheet to check icon references against
    #[arg(long)]
    pub stylesheet: Option<PathBuf>,

    /// Collect every reference on a stylesheet line, not just the first
    #[arg(long)]
    pub all_matches: bool,

    /// Print run statistics as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: IconSetArgs, printer: &Printer) -> Result<RunStats> {
    let mut config = args.project.load()?;
    if let Some(palette) = args.palette {
        config.palette = palette;
    }
    if let Some(templates) = args.templates {
        config.templates = templates;
    }
    if let Some(output) = args.output {
        config.output = output;
    }
    if let Some(stylesheet) = args.stylesheet {
        config.stylesheet = stylesheet;
    }

    let palette = Palette::load(&config.palette)?;
    let mode = if args.all_matches {
        MatchMode::All
    } else {
        MatchMode::FirstPerLine
    };

    printer.status(
        "Generating",
        &format!("icons with the {} palette", printer.cyan(&palette.name)),
    );
    printer.detail("Templates", &display_path(&config.templates));
    printer.detail("Stylesheet", &display_path(&config.stylesheet));
    printer.detail("Output", &display_path(&config.output));

    let pipeline = AssetPipeline::from_config(&config, &palette, mode)?;
    let rasterizer = SvgRasterizer::new().with_resources_dir(&config.templates);
    let stats = RenderContext::scoped(rasterizer, config.render_timeout(), |context| {
        pipeline.run(context)
    })?;

    for asset in &stats.assets {
        printer.detail("Created", asset);
    }

    report(&stats, printer);

    if args.json {
        let json = serde_json::to_string_pretty(&stats).map_err(|e| IconError::Parse {
            message: format!("Failed to serialize stats: {}", e),
            help: None,
        })?;
        println!("{}", json);
    }

    printer.success(
        "Finished",
        &format!(
            "{} in {}",
            plural(stats.produced, "icon", "icons"),
            display_path(pipeline.output_dir())
        ),
    );

    Ok(stats)
}

fn report(stats: &RunStats, printer: &Printer) {
    printer.info(
        "Templates",
        &format!(
            "{} ({} skipped)",
            plural(stats.templates, "template", "templates"),
            stats.skipped
        ),
    );

    match stats.references {
        Some(count) => printer.info(
            "References",
            &format!(
                "{} ({} not produced)",
                plural(count, "reference", "references"),
                stats.unmatched.len()
            ),
        ),
        None => printer.warning("References", "stylesheet not checked"),
    }

    if !stats.failures.is_empty() {
        printer.error(
            "Failed",
            &plural(stats.failures.len(), "asset", "assets"),
        );
    }

    let diagnostics = stats.diagnostics();
    if !diagnostics.is_ok() {
        print_diagnostics(&diagnostics, printer);
    }
}

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::qrc::{generate_manifest, write_manifest};

use super::ProjectArgs;

/// Write the Qt resource file listing the generated icons
#[derive(Args, Debug)]
pub struct ManifestArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Directory of generated icons
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Resource file to write
    #[arg(long)]
    pub qrc: Option<PathBuf>,

    /// Prefix for icon resources
    #[arg(long)]
    pub resource_prefix: Option<String>,

    /// Prefix for the stylesheet resource
    #[arg(long)]
    pub style_prefix: Option<String>,
}

pub fn run(args: ManifestArgs, printer: &Printer) -> Result<PathBuf> {
    let config = args.project.load()?;
    let output = args.output.unwrap_or(config.output);
    let qrc = args.qrc.unwrap_or(config.qrc);
    let resource_prefix = args.resource_prefix.unwrap_or(config.resource_prefix);
    let style_prefix = args.style_prefix.unwrap_or(config.style_prefix);

    printer.status("Scanning", &display_path(&output));
    printer.detail("Prefixes", &format!("{} / {}", resource_prefix, style_prefix));

    let content = generate_manifest(&output, &resource_prefix, &style_prefix)?;
    let entries = content.lines().filter(|l| l.contains("<file>rc/")).count();

    write_manifest(&qrc, &content)?;

    printer.success(
        "Wrote",
        &format!("{} ({})", display_path(&qrc), plural(entries, "icon", "icons")),
    );

    Ok(qrc)
}

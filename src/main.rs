use clap::Parser;
use iconset::cli::{Cli, Commands};
use iconset::output::Printer;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new().verbose(cli.verbose);

    match cli.command {
        Commands::GeneratePaletteImage(args) => {
            iconset::cli::palette::run(args, &printer)?;
        }
        Commands::GenerateIconSet(args) => {
            iconset::cli::icons::run(args, &printer)?;
        }
        Commands::GenerateManifest(args) => {
            iconset::cli::manifest::run(args, &printer)?;
        }
        Commands::Init(args) => {
            iconset::cli::init::run(args, &printer)?;
        }
        Commands::Completions(args) => iconset::cli::completions::run(args)?,
    }

    Ok(())
}

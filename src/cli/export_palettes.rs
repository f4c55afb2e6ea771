use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};

use crate::modules::palettes::export_palettes;

use super::*;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct ExportPalettesCli {
    // This is just dummy command because we are already in the command
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Writes the active palette library as .json or .pal
    ExportPalettes {
        /// Output path, .pal for binary, anything else for JSON
        output: PathBuf,
        #[command(flatten)]
        config: ConfigArgs,
    },
}

pub struct ExportPalettes;
impl Cli for ExportPalettes {
    fn name(&self) -> &'static str {
        "export-palettes"
    }

    fn cli(&self) -> CliRes {
        let cli = ExportPalettesCli::parse();
        let Commands::ExportPalettes { output, config } = cli.command;

        report((|| -> eyre::Result<()> {
            let (_, library) = config.load()?;

            export_palettes(&library, &output)?;
            println!("Wrote {}", output.display());

            Ok(())
        })())
    }

    fn cli_help(&self) {
        let _ = ExportPalettesCli::command().print_help();
    }
}

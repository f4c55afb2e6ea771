use clap::{CommandFactory, Parser, Subcommand};

use crate::modules::palettes::palette_listing;

use super::*;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct PalettesCli {
    // This is just dummy command because we are already in the command
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Lists the standard palette library
    Palettes {
        /// retro, biome, themed or utility
        #[arg(short, long)]
        category: Option<String>,
        #[command(flatten)]
        config: ConfigArgs,
    },
}

pub struct Palettes;
impl Cli for Palettes {
    fn name(&self) -> &'static str {
        "palettes"
    }

    fn cli(&self) -> CliRes {
        let cli = PalettesCli::parse();
        let Commands::Palettes { category, config } = cli.command;

        report((|| -> eyre::Result<()> {
            let (_, library) = config.load()?;

            for line in palette_listing(&library, category.as_deref())? {
                println!("{line}");
            }

            Ok(())
        })())
    }

    fn cli_help(&self) {
        let _ = PalettesCli::command().print_help();
    }
}

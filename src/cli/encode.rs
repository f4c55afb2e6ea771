use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use sprtz::PaletteSource;

use crate::modules::convert::png_to_sprtz;

use super::*;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct EncodeCli {
    // This is just dummy command because we are already in the command
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Imports a PNG of at most 40x40 pixels and 14 colors
    Encode {
        /// Input .png
        input: PathBuf,
        /// Output .sprtz
        output: PathBuf,
        /// Writes version 1 with the palette embedded
        #[arg(long)]
        v1: bool,
        #[command(flatten)]
        config: ConfigArgs,
    },
}

pub struct Encode;
impl Cli for Encode {
    fn name(&self) -> &'static str {
        "encode"
    }

    fn cli(&self) -> CliRes {
        let cli = EncodeCli::parse();
        let Commands::Encode {
            input,
            output,
            v1,
            config,
        } = cli.command;

        report((|| -> eyre::Result<()> {
            let (config, library) = config.load()?;

            let source = png_to_sprtz(&input, &output, &library, config.match_threshold(), v1)?;

            match source {
                PaletteSource::Standard(id) => println!(
                    "{} -> {} (standard palette {} {})",
                    input.display(),
                    output.display(),
                    id,
                    library.palette_name(id).unwrap_or_default()
                ),
                PaletteSource::Custom => println!(
                    "{} -> {} (custom palette)",
                    input.display(),
                    output.display()
                ),
            }

            Ok(())
        })())
    }

    fn cli_help(&self) {
        let _ = EncodeCli::command().print_help();
    }
}

use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};

use crate::modules::convert::sprtz_to_png;

use super::*;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct DecodeCli {
    // This is just dummy command because we are already in the command
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Exports a .sprtz file to PNG
    Decode {
        /// Input .sprtz
        input: PathBuf,
        /// Output .png
        output: PathBuf,
        #[command(flatten)]
        config: ConfigArgs,
    },
}

pub struct Decode;
impl Cli for Decode {
    fn name(&self) -> &'static str {
        "decode"
    }

    fn cli(&self) -> CliRes {
        let cli = DecodeCli::parse();
        let Commands::Decode {
            input,
            output,
            config,
        } = cli.command;

        report((|| -> eyre::Result<()> {
            let (_, library) = config.load()?;

            sprtz_to_png(&input, &output, &library)?;
            println!("{} -> {}", input.display(), output.display());

            Ok(())
        })())
    }

    fn cli_help(&self) {
        let _ = DecodeCli::command().print_help();
    }
}

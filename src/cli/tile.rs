use clap::{CommandFactory, Parser, Subcommand};

use crate::modules::tile::{describe_tile, parse_packed};

use super::*;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct TileCli {
    // This is just dummy command because we are already in the command
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Unpacks a tile descriptor
    Tile {
        /// Packed value, decimal or 0x hexadecimal
        packed: String,
        /// Reads the value as a 32-bit extended tile
        #[arg(short, long)]
        extended: bool,
    },
}

pub struct Tile;
impl Cli for Tile {
    fn name(&self) -> &'static str {
        "tile"
    }

    fn cli(&self) -> CliRes {
        let cli = TileCli::parse();
        let Commands::Tile { packed, extended } = cli.command;

        report((|| -> eyre::Result<()> {
            println!("{}", describe_tile(parse_packed(&packed)?, extended)?);

            Ok(())
        })())
    }

    fn cli_help(&self) {
        let _ = TileCli::command().print_help();
    }
}

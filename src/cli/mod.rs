use std::path::PathBuf;

use clap::Args;
use palette::StandardPaletteLibrary;

use crate::config::{parse_config, parse_config_from_file, Config};

use self::{
    decode::Decode, encode::Encode, export_palettes::ExportPalettes, info::Info,
    palettes::Palettes, tile::Tile, upgrade::Upgrade,
};

mod decode;
mod encode;
mod export_palettes;
mod info;
mod palettes;
mod tile;
mod upgrade;

pub enum CliRes {
    Ok,
    Err,
    NoCli,
}

pub trait Cli {
    fn name(&self) -> &'static str;
    /// Each module parses the whole command line by itself.
    fn cli(&self) -> CliRes;
    fn cli_help(&self);
}

/// Shared by every command.
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Path to config.toml, defaults to the one next to the binary
    #[arg(long)]
    config: Option<PathBuf>,
}

impl ConfigArgs {
    pub fn load(&self) -> eyre::Result<(Config, StandardPaletteLibrary)> {
        let config = match &self.config {
            Some(path) => parse_config_from_file(path)?,
            None => parse_config()?,
        };

        let library = config.load_library()?;

        Ok((config, library))
    }
}

pub fn report(res: eyre::Result<()>) -> CliRes {
    match res {
        Ok(()) => CliRes::Ok,
        Err(err) => {
            eprintln!("{err:?}");
            CliRes::Err
        }
    }
}

/// Runs command-line options
pub fn cli() -> CliRes {
    let args: Vec<String> = std::env::args().collect();

    // Add new modules here.
    let modules: &[&dyn Cli] = &[
        &Info,
        &Decode,
        &Encode,
        &Upgrade,
        &Palettes,
        &ExportPalettes,
        &Tile,
    ];

    let help = || {
        println!(
            "\
spred

Available commands:"
        );
        for module in modules {
            println!("{}", module.name());
        }
        println!("\nhelp <command> for details");
    };

    if args.len() < 2 {
        help();
        return CliRes::NoCli;
    }

    if args[1] == "help" {
        match args.get(2).and_then(|name| modules.iter().find(|m| m.name() == name)) {
            Some(module) => module.cli_help(),
            None => help(),
        }

        return CliRes::Ok;
    }

    for module in modules {
        if args[1] == module.name() {
            return module.cli();
        }
    }

    // In case nothing fits then prints this again.
    help();

    CliRes::Err
}

use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use sprtz::PaletteSource;

use crate::modules::upgrade::{upgrade, UpgradeOutcome};

use super::*;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct UpgradeCli {
    // This is just dummy command because we are already in the command
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Rewrites version 1 .sprtz files as version 2 in place
    Upgrade {
        /// A .sprtz file or a folder to search recursively
        path: PathBuf,
        #[command(flatten)]
        config: ConfigArgs,
    },
}

pub struct Upgrade;
impl Cli for Upgrade {
    fn name(&self) -> &'static str {
        "upgrade"
    }

    fn cli(&self) -> CliRes {
        let cli = UpgradeCli::parse();
        let Commands::Upgrade { path, config } = cli.command;

        report((|| -> eyre::Result<()> {
            let (_, library) = config.load()?;

            let res = upgrade(&path, &library);

            let (mut standard, mut custom, mut current, mut failed) = (0, 0, 0, 0);

            for (path, res) in res {
                match res {
                    Ok(UpgradeOutcome::Upgraded(PaletteSource::Standard(_))) => standard += 1,
                    Ok(UpgradeOutcome::Upgraded(PaletteSource::Custom)) => custom += 1,
                    Ok(UpgradeOutcome::AlreadyCurrent) => current += 1,
                    Err(err) => {
                        eprintln!("{}: {}", path.display(), err);
                        failed += 1;
                    }
                }
            }

            println!(
                "Upgraded {} file(s), {} with a standard palette. {} already version 2.",
                standard + custom,
                standard,
                current
            );

            if failed > 0 {
                return Err(eyre::eyre!("{failed} file(s) failed"));
            }

            Ok(())
        })())
    }

    fn cli_help(&self) {
        let _ = UpgradeCli::command().print_help();
    }
}

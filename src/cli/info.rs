use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};

use crate::modules::info::sprtz_info;

use super::*;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct InfoCli {
    // This is just dummy command because we are already in the command
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Prints version, size, palette mode and compression of .sprtz files
    Info {
        /// .sprtz files
        #[arg(required = true)]
        paths: Vec<PathBuf>,
        #[command(flatten)]
        config: ConfigArgs,
    },
}

pub struct Info;
impl Cli for Info {
    fn name(&self) -> &'static str {
        "info"
    }

    fn cli(&self) -> CliRes {
        let cli = InfoCli::parse();
        let Commands::Info { paths, config } = cli.command;

        report((|| -> eyre::Result<()> {
            let (_, library) = config.load()?;
            let mut failed = 0;

            for path in paths {
                match sprtz_info(&path, &library) {
                    Ok(info) => println!("{info}"),
                    Err(err) => {
                        eprintln!("{}: {}", path.display(), err);
                        failed += 1;
                    }
                }
            }

            if failed > 0 {
                return Err(eyre::eyre!("{failed} file(s) could not be read"));
            }

            Ok(())
        })())
    }

    fn cli_help(&self) {
        let _ = InfoCli::command().print_help();
    }
}

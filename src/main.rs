mod cli;
mod config;
pub mod modules;

use std::process::ExitCode;

fn main() -> ExitCode {
    // Log to stderr, `RUST_LOG=debug` for codec details.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let err_exit = ExitCode::from(1);
    let ok_exit = ExitCode::from(0);

    match cli::cli() {
        cli::CliRes::Ok => ok_exit,
        cli::CliRes::Err | cli::CliRes::NoCli => err_exit,
    }
}

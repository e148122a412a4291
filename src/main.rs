mod app;
mod common;
mod error;
mod utils;
mod workers;

use clap::Parser;
use lscolors::LsColors;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();

    let args = app::Args::parse();
    let ls_colors = LsColors::from_env().unwrap_or_default();

    match app::run(&args, &ls_colors) {
        Ok(()) => ExitCode::SUCCESS,
        // `reveal /usr/bin | head`
        Err(err) if is_broken_pipe(&err) => ExitCode::SUCCESS,
        Err(err) => {
            log::debug!("{err:?}");
            eprint!("{}", error::report(&err).paint());
            ExitCode::from(error::EXIT_FAILURE)
        }
    }
}

fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.downcast_ref::<io::Error>().is_some_and(|e| e.kind() == io::ErrorKind::BrokenPipe)
}

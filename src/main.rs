use std::process::ExitCode;

use tracing::error;

mod cli;
mod config;
mod error;
mod library;
mod organize;
mod progress;
mod runtime;

fn main() -> ExitCode {
    match runtime::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

use std::process::ExitCode;

use clap::Parser;
use leadlens::args::Args;
use leadlens::config::Config;
use leadlens::{app, presentation};

fn main() -> ExitCode {
    let args = Args::parse();
    let config = match Config::from_args(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match app::run(&config) {
        Ok(result) => {
            let had_rejects = !result.rejected.is_empty();
            if let Err(e) = presentation::print_results(&result, &config) {
                eprintln!("Output Error: {e}");
                return ExitCode::FAILURE;
            }
            if config.strict && had_rejects {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            eprintln!("Application Error: {e}");
            ExitCode::FAILURE
        }
    }
}

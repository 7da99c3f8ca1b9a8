use std::process::ExitCode;

use finance_tracker::{cli, cli::output, config::Config};

fn main() -> ExitCode {
    finance_tracker::init();
    match cli::run_cli(Config::from_env()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::error(&err);
            ExitCode::FAILURE
        }
    }
}

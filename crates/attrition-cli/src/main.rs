use std::process::ExitCode;

use clap::Parser;

use attrition_cli::args::Cli;

fn main() -> ExitCode {
    // Info-level logging unless RUST_LOG overrides; reports go to stdout.
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .try_init();

    let cli = Cli::parse();
    match attrition_cli::run(&cli) {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

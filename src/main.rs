use acl_sphere::core::system::System;
use clap::Parser;
use macros::log;
use std::process::ExitCode;

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::Cli::parse();

    let system = match System::initialize(&cli.config) {
        Ok(system) => system,
        Err(err) => {
            eprintln!("{:#}", anyhow::Error::from(err));
            return ExitCode::FAILURE;
        }
    };

    let result = cli::run(cli.command, &system).await;
    let code = match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            log!(err);
            ExitCode::FAILURE
        }
    };

    system.terminate();
    code
}

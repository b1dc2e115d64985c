pub mod cli;
pub mod config;
pub mod deployment_manager;
pub mod docker_client;
pub mod error;
pub mod git_client;
pub mod process;
pub mod types;

use clap::Parser;
pub use cli::CLI;
use process::Interrupt;
use tracing_subscriber::EnvFilter;

/// Parses the command line, runs the requested action and returns the
/// process exit code.
pub async fn run() -> i32 {
    let cli = match CLI::try_parse() {
        Ok(cli) => cli,
        Err(e) => return cli::parse_failure(&e).exit_code(),
    };
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // Logs go to stderr; stdout carries only the messages users act on.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    let mut interrupt = match Interrupt::listen() {
        Ok(interrupt) => interrupt,
        Err(e) => {
            println!("{}", e);
            return types::Outcome::Failed.exit_code();
        }
    };

    cli::dispatch(&cli, &mut interrupt).await.exit_code()
}

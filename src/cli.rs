use crate::config::{Config, DEFAULT_DOCKER_PROGRAM, DEFAULT_GIT_PROGRAM, DEFAULT_SINCE};
use crate::deployment_manager::DeploymentManager;
use crate::error::Error;
use crate::process::Interrupt;
use crate::types::{Action, Outcome};
use clap::Parser;
use clap::error::ErrorKind;
use tracing::debug;

pub const BIN_NAME: &str = "redeploy";

#[derive(Parser, Debug)]
#[command(
    name = BIN_NAME,
    about = "Redeploy docker compose services or follow their logs",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct CLI {
    #[arg(
        value_name = "ACTION",
        index = 1,
        help = "Omit to redeploy, or one of: logs, help"
    )]
    pub action: Option<String>,
    #[arg(index = 2, hide = true)]
    pub extra: Vec<String>,
    #[arg(short = 'f', long, help = "Compose file passed to docker compose")]
    pub compose_file: Option<String>,
    #[arg(long, default_value = DEFAULT_SINCE, help = "How far back `logs` starts")]
    pub since: String,
    #[arg(long, default_value = DEFAULT_GIT_PROGRAM)]
    pub git_program: String,
    #[arg(long, default_value = DEFAULT_DOCKER_PROGRAM)]
    pub docker_program: String,
    #[arg(short, long, action = clap::ArgAction::Count, help = "Increase verbosity (-v, -vv, etc.)")]
    pub verbose: u8,
}

pub fn usage() -> String {
    format!(
        "\nUsage: {BIN_NAME} [logs|help]\n\n\
         \x20 (no argument) : Redeploy and show logs\n\
         \x20 logs          : Show logs only\n\
         \x20 help          : Show this help message\n"
    )
}

pub fn unknown_command() -> String {
    format!("Unknown command. Usage: {BIN_NAME} [logs|help]")
}

pub fn redeploy_hint() -> String {
    format!("\nService is running. Use '{BIN_NAME} logs' to view logs.\n")
}

/// Maps a command line clap rejected to an outcome.
///
/// Dash-prefixed tokens that are not one of our flags are unknown commands
/// like any other word. Malformed flags (a missing value, say) get clap's
/// message and still exit 1.
pub fn parse_failure(error: &clap::Error) -> Outcome {
    match error.kind() {
        ErrorKind::UnknownArgument => {
            println!("{}", unknown_command());
            Outcome::UnknownDone
        }
        _ => {
            eprint!("{}", error);
            Outcome::Failed
        }
    }
}

/// Runs the action named on the command line and reports how it ended.
pub async fn dispatch(cli: &CLI, interrupt: &mut Interrupt) -> Outcome {
    let action = Action::from_arg(cli.action.as_deref());
    debug!("Dispatching {:?}", action);

    match action {
        Action::Redeploy => {
            let mut manager = DeploymentManager::new(Config::from_cli(cli), interrupt);
            match manager.redeploy().await {
                Ok(()) => {
                    println!("{}", redeploy_hint());
                    Outcome::RedeployDone
                }
                Err(e) => failure(e),
            }
        }
        Action::Logs => {
            let mut manager = DeploymentManager::new(Config::from_cli(cli), interrupt);
            match manager.tail_logs().await {
                Ok(()) => Outcome::LogsDone,
                Err(e) => failure(e),
            }
        }
        Action::Help => {
            println!("{}", usage());
            Outcome::HelpDone
        }
        Action::Unknown(token) => {
            debug!("Unrecognized action {:?}", token);
            println!("{}", unknown_command());
            Outcome::UnknownDone
        }
    }
}

fn failure(error: Error) -> Outcome {
    match error {
        Error::Interrupted => Outcome::Interrupted,
        other => {
            println!("{}", other);
            Outcome::Failed
        }
    }
}

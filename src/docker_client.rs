use std::process::ExitStatus;

use tracing::info;

use crate::error::Result;
use crate::process::{Interrupt, run_inherited};

/// Drives `docker compose` for the project in the working directory.
pub struct ComposeClient {
    program: String,
    compose_file: Option<String>,
}

impl ComposeClient {
    pub fn new(program: String, compose_file: Option<String>) -> Self {
        Self {
            program,
            compose_file,
        }
    }

    fn base_args(&self) -> Vec<String> {
        let mut args = vec!["compose".to_string()];
        if let Some(file) = &self.compose_file {
            args.push("-f".to_string());
            args.push(file.clone());
        }
        args
    }

    pub fn up_args(&self) -> Vec<String> {
        let mut args = self.base_args();
        args.extend(
            ["up", "-d", "--force-recreate", "--no-deps", "--build"]
                .iter()
                .map(|s| s.to_string()),
        );
        args
    }

    pub fn logs_args(&self, since: &str) -> Vec<String> {
        let mut args = self.base_args();
        args.extend(["logs", "-f", "--since", since].iter().map(|s| s.to_string()));
        args
    }

    /// Recreates and rebuilds the services in the background.
    pub async fn up(&self, interrupt: &mut Interrupt) -> Result<ExitStatus> {
        info!("Recreating services");
        run_inherited(&self.program, &self.up_args(), interrupt).await
    }

    /// Follows service logs starting `since` ago until the stream ends.
    pub async fn logs(&self, since: &str, interrupt: &mut Interrupt) -> Result<ExitStatus> {
        info!("Following logs since {}", since);
        run_inherited(&self.program, &self.logs_args(since), interrupt).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_up_args() {
        let compose = ComposeClient::new("docker".to_string(), None);
        assert_eq!(
            compose.up_args(),
            vec!["compose", "up", "-d", "--force-recreate", "--no-deps", "--build"]
        );
    }

    #[test]
    fn test_logs_args() {
        let compose = ComposeClient::new("docker".to_string(), None);
        assert_eq!(
            compose.logs_args("30s"),
            vec!["compose", "logs", "-f", "--since", "30s"]
        );
    }

    #[test]
    fn test_compose_file_goes_before_subcommand() {
        let compose = ComposeClient::new(
            "docker".to_string(),
            Some("deploy/docker-compose.prod.yml".to_string()),
        );
        assert_eq!(
            compose.logs_args("5m"),
            vec![
                "compose",
                "-f",
                "deploy/docker-compose.prod.yml",
                "logs",
                "-f",
                "--since",
                "5m"
            ]
        );
        assert_eq!(
            &compose.up_args()[..4],
            ["compose", "-f", "deploy/docker-compose.prod.yml", "up"]
        );
    }
}

use crate::config::Config;
use crate::docker_client::ComposeClient;
use crate::error::Result;
use crate::git_client::GitClient;
use crate::process::Interrupt;

pub struct DeploymentManager<'a> {
    git: GitClient,
    compose: ComposeClient,
    since: String,
    interrupt: &'a mut Interrupt,
}

impl<'a> DeploymentManager<'a> {
    pub fn new(config: Config, interrupt: &'a mut Interrupt) -> Self {
        Self {
            git: GitClient::new(config.git_program),
            compose: ComposeClient::new(config.docker_program, config.compose_file),
            since: config.since,
            interrupt,
        }
    }

    /// Pulls, then recreates and rebuilds the services.
    ///
    /// Child exit statuses are not inspected: the compose step runs even if
    /// the pull failed. Only launch errors and interrupts stop the sequence.
    pub async fn redeploy(&mut self) -> Result<()> {
        self.git.pull(self.interrupt).await?;
        self.compose.up(self.interrupt).await?;
        Ok(())
    }

    pub async fn tail_logs(&mut self) -> Result<()> {
        self.compose.logs(&self.since, self.interrupt).await?;
        Ok(())
    }
}

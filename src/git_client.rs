use std::process::ExitStatus;

use tracing::info;

use crate::error::Result;
use crate::process::{Interrupt, run_inherited};

pub struct GitClient {
    program: String,
}

impl GitClient {
    pub fn new(program: String) -> Self {
        Self { program }
    }

    pub fn pull_args(&self) -> Vec<String> {
        vec!["pull".to_string()]
    }

    /// Pulls the latest changes into the repository in the working directory.
    pub async fn pull(&self, interrupt: &mut Interrupt) -> Result<ExitStatus> {
        info!("Pulling latest changes");
        run_inherited(&self.program, &self.pull_args(), interrupt).await
    }
}

use crate::cli::CLI;

pub const DEFAULT_SINCE: &str = "30s";
pub const DEFAULT_GIT_PROGRAM: &str = "git";
pub const DEFAULT_DOCKER_PROGRAM: &str = "docker";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub git_program: String,
    pub docker_program: String,
    pub compose_file: Option<String>,
    pub since: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            git_program: DEFAULT_GIT_PROGRAM.to_string(),
            docker_program: DEFAULT_DOCKER_PROGRAM.to_string(),
            compose_file: None,
            since: DEFAULT_SINCE.to_string(),
        }
    }
}

impl Config {
    pub fn from_cli(cli: &CLI) -> Self {
        Self {
            git_program: cli.git_program.clone(),
            docker_program: cli.docker_program.clone(),
            compose_file: cli.compose_file.clone(),
            since: cli.since.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_defaults_match_cli_defaults() {
        let cli = CLI::parse_from(["redeploy"]);
        assert_eq!(Config::from_cli(&cli), Config::default());
    }

    #[test]
    fn test_cli_overrides() {
        let cli = CLI::parse_from([
            "redeploy",
            "logs",
            "--since",
            "10m",
            "-f",
            "compose.prod.yml",
            "--docker-program",
            "podman",
        ]);
        let config = Config::from_cli(&cli);
        assert_eq!(config.since, "10m");
        assert_eq!(config.compose_file.as_deref(), Some("compose.prod.yml"));
        assert_eq!(config.docker_program, "podman");
        assert_eq!(config.git_program, "git");
    }
}

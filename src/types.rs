/// What the single positional argument asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Redeploy,
    Logs,
    Help,
    Unknown(String),
}

impl Action {
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            None | Some("") => Action::Redeploy,
            Some("logs") => Action::Logs,
            Some("help") => Action::Help,
            Some(other) => Action::Unknown(other.to_string()),
        }
    }
}

/// Terminal state of one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    RedeployDone,
    LogsDone,
    HelpDone,
    UnknownDone,
    Interrupted,
    Failed,
}

impl Outcome {
    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::UnknownDone | Outcome::Failed => 1,
            Outcome::RedeployDone | Outcome::LogsDone | Outcome::HelpDone | Outcome::Interrupted => {
                0
            }
        }
    }
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Ctrl+C arrived while a child process was running.
    #[error("interrupted")]
    Interrupted,

    #[error("failed to launch `{program}`: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed waiting on `{program}`: {source}")]
    Wait {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("could not listen for Ctrl+C: {0}")]
    Signal(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

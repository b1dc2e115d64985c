use std::process::{ExitStatus, Stdio};

use tokio::process::Command;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};

#[cfg(unix)]
const SIGINT: i32 = 2;

/// Ctrl+C listener for the whole run.
///
/// Registered once, before the first child starts. A SIGINT that arrives
/// between two steps stays queued and stops the next step.
pub struct Interrupt {
    #[cfg(unix)]
    signal: tokio::signal::unix::Signal,
    #[cfg(windows)]
    signal: tokio::signal::windows::CtrlC,
}

impl Interrupt {
    pub fn listen() -> Result<Self> {
        #[cfg(unix)]
        let signal = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::interrupt());
        #[cfg(windows)]
        let signal = tokio::signal::windows::ctrl_c();

        Ok(Self {
            signal: signal.map_err(Error::Signal)?,
        })
    }

    /// Returns `Error::Interrupted` if a Ctrl+C is already queued.
    pub async fn check(&mut self) -> Result<()> {
        // Lets the runtime drain the signal pipe first.
        tokio::task::yield_now().await;
        tokio::select! {
            biased;
            Some(()) = self.signal.recv() => Err(Error::Interrupted),
            () = std::future::ready(()) => Ok(()),
        }
    }
}

/// Runs `program` with the caller's stdio and waits for it to exit.
///
/// Returns `Error::Interrupted` as soon as Ctrl+C is received, or when the
/// child itself was killed by SIGINT. The child is never killed from here:
/// a terminal Ctrl+C reaches the whole process group.
pub async fn run_inherited(
    program: &str,
    args: &[String],
    interrupt: &mut Interrupt,
) -> Result<ExitStatus> {
    interrupt.check().await?;
    info!("Running {} {}", program, args.join(" "));

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|source| Error::Launch {
            program: program.to_string(),
            source,
        })?;

    let status = tokio::select! {
        biased;
        Some(()) = interrupt.signal.recv() => return Err(Error::Interrupted),
        status = child.wait() => status.map_err(|source| Error::Wait {
            program: program.to_string(),
            source,
        })?,
    };

    if killed_by_interrupt(&status) {
        debug!("{} was interrupted", program);
        return Err(Error::Interrupted);
    }
    if !status.success() {
        warn!("{} exited with {}", program, status);
    }
    Ok(status)
}

#[cfg(unix)]
fn killed_by_interrupt(status: &ExitStatus) -> bool {
    use std::os::unix::process::ExitStatusExt;
    status.signal() == Some(SIGINT)
}

#[cfg(not(unix))]
fn killed_by_interrupt(_status: &ExitStatus) -> bool {
    false
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_run_inherited_reports_status() {
        let mut interrupt = Interrupt::listen().unwrap();
        let ok = run_inherited("true", &[], &mut interrupt).await.unwrap();
        assert!(ok.success());

        let failed = run_inherited("false", &[], &mut interrupt).await.unwrap();
        assert!(!failed.success());
    }

    #[tokio::test]
    async fn test_run_inherited_missing_program() {
        let mut interrupt = Interrupt::listen().unwrap();
        let err = run_inherited("/nonexistent/redeployer-test-bin", &[], &mut interrupt)
            .await
            .unwrap_err();
        match err {
            Error::Launch { program, .. } => {
                assert_eq!(program, "/nonexistent/redeployer-test-bin")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_child_killed_by_sigint_counts_as_interrupt() {
        let mut interrupt = Interrupt::listen().unwrap();
        let args = vec!["-c".to_string(), "kill -INT $$".to_string()];
        let err = run_inherited("sh", &args, &mut interrupt)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Interrupted));
    }

    #[tokio::test]
    async fn test_child_killed_by_other_signal_is_just_a_status() {
        let mut interrupt = Interrupt::listen().unwrap();
        let args = vec!["-c".to_string(), "kill -TERM $$".to_string()];
        let status = run_inherited("sh", &args, &mut interrupt).await.unwrap();
        assert!(!status.success());
    }
}

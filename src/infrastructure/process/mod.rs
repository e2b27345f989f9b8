// Process module - External debugger process execution
use crate::domain::error::BoardComResult;
use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;

/// Captured result of one debugger invocation
#[derive(Debug, Clone)]
pub struct ProcessOutput {
    /// Exit status 0
    pub success: bool,
    /// Decoded standard output; stderr is never captured
    pub stdout: String,
}

/// Abstraction over external process execution so the dispatcher can be
/// exercised without spawning children.
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    async fn run(&self, program: &str, args: &[String]) -> BoardComResult<ProcessOutput>;
}

/// Runner backed by real child processes. Each call blocks until the
/// child exits; stderr stays attached to the parent.
pub struct SystemRunner;

#[async_trait]
impl ProcessRunner for SystemRunner {
    async fn run(&self, program: &str, args: &[String]) -> BoardComResult<ProcessOutput> {
        let child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()?;
        let output = child.wait_with_output().await?;

        Ok(ProcessOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        })
    }
}

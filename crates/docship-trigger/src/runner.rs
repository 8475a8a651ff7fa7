//! Subprocess execution.

use std::future::Future;
use std::io;
use std::process::Stdio;

use tokio::process::Command;

use crate::command::Invocation;

/// How a finished child process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStatus {
    /// Exit code, `None` when the process was killed by a signal
    pub code: Option<i32>,
}

impl RunStatus {
    pub fn exited(code: i32) -> Self {
        Self { code: Some(code) }
    }

    pub fn signaled() -> Self {
        Self { code: None }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs an invocation to completion.
///
/// Implementations must not retry; one call means one child process.
pub trait Runner {
    fn run(&self, invocation: &Invocation) -> impl Future<Output = io::Result<RunStatus>> + Send;
}

/// Spawns real child processes with inherited standard streams.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl Runner for ProcessRunner {
    async fn run(&self, invocation: &Invocation) -> io::Result<RunStatus> {
        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .envs(invocation.env.iter().map(|(k, v)| (k, v)))
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await?;

        Ok(RunStatus {
            code: status.code(),
        })
    }
}

//! The build trigger.

use std::io;
use std::path::PathBuf;
use std::time::Instant;

use crate::command::{BuildCommand, Invocation};
use crate::runner::{ProcessRunner, Runner};
use crate::target::{DeployTarget, DEPLOY_TYPE_VAR};

/// Result of a successful build.
#[derive(Debug)]
pub struct BuildReport {
    /// Target the site was built for
    pub target: DeployTarget,

    /// Output directory reported by the command (not checked on disk)
    pub output_dir: PathBuf,

    /// Total build time in milliseconds
    pub duration_ms: u64,
}

/// The external build failed.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to run `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("`{command}` exited with status {code}")]
    Exited { command: String, code: i32 },

    #[error("`{command}` was terminated by a signal")]
    Terminated { command: String },
}

/// Runs the external generator once for a deployment target.
pub struct BuildTrigger<R = ProcessRunner> {
    target: DeployTarget,
    command: BuildCommand,
    base_path: String,
    runner: R,
}

impl BuildTrigger {
    /// Create a trigger that spawns real processes.
    pub fn new(target: DeployTarget, command: BuildCommand) -> Self {
        Self {
            target,
            command,
            base_path: target.default_base_path().to_string(),
            runner: ProcessRunner,
        }
    }
}

impl<R: Runner> BuildTrigger<R> {
    /// Replace the runner, keeping everything else.
    pub fn with_runner<S: Runner>(self, runner: S) -> BuildTrigger<S> {
        BuildTrigger {
            target: self.target,
            command: self.command,
            base_path: self.base_path,
            runner,
        }
    }

    /// Override the base path shown in status output.
    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = base_path.into();
        self
    }

    /// Resolve the subprocess call, with the target flag in its environment.
    pub fn invocation(&self) -> Invocation {
        Invocation {
            program: self.command.program.clone(),
            args: self.command.args.clone(),
            env: vec![(DEPLOY_TYPE_VAR.to_string(), self.target.id().to_string())],
        }
    }

    /// Run the generator and wait for it to finish.
    pub async fn run(&self) -> Result<BuildReport, BuildError> {
        let start = Instant::now();
        let invocation = self.invocation();

        tracing::info!("Building {}...", self.target.display_name());
        tracing::info!("Base path: {}", self.base_path);
        tracing::debug!(
            command = %invocation,
            "{}={}",
            DEPLOY_TYPE_VAR,
            self.target.id()
        );

        let status = self
            .runner
            .run(&invocation)
            .await
            .map_err(|source| BuildError::Spawn {
                program: invocation.program.clone(),
                source,
            })?;

        if !status.success() {
            let command = invocation.to_string();
            return Err(match status.code {
                Some(code) => BuildError::Exited { command, code },
                None => BuildError::Terminated { command },
            });
        }

        let report = BuildReport {
            target: self.target,
            output_dir: self.command.output_dir.clone(),
            duration_ms: start.elapsed().as_millis() as u64,
        };

        tracing::info!(
            "{} build complete in {}ms",
            self.target.display_name(),
            report.duration_ms
        );
        tracing::info!("Output directory: {}", report.output_dir.display());

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::NPX;
    use crate::runner::RunStatus;
    use pretty_assertions::assert_eq;
    use std::sync::Mutex;

    /// Records every invocation and answers with a canned result.
    struct RecordingRunner {
        calls: Mutex<Vec<Invocation>>,
        result: fn() -> io::Result<RunStatus>,
    }

    impl RecordingRunner {
        fn new(result: fn() -> io::Result<RunStatus>) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                result,
            }
        }

        fn calls(&self) -> Vec<Invocation> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl Runner for &RecordingRunner {
        async fn run(&self, invocation: &Invocation) -> io::Result<RunStatus> {
            self.calls.lock().unwrap().push(invocation.clone());
            (self.result)()
        }
    }

    fn trigger() -> BuildTrigger {
        BuildTrigger::new(DeployTarget::Github, BuildCommand::default())
    }

    #[test]
    fn invocation_sets_deploy_type() {
        let invocation = trigger().invocation();

        assert_eq!(
            invocation,
            Invocation {
                program: NPX.to_string(),
                args: vec![
                    "vitepress".to_string(),
                    "build".to_string(),
                    "docs".to_string()
                ],
                env: vec![("DEPLOY_TYPE".to_string(), "github".to_string())],
            }
        );
    }

    #[test]
    fn base_path_follows_target_unless_overridden() {
        assert_eq!(trigger().base_path, "/WHartTest/");
        assert_eq!(trigger().with_base_path("/docs/").base_path, "/docs/");
    }

    #[tokio::test]
    async fn reports_output_dir_on_success() {
        let runner = RecordingRunner::new(|| Ok(RunStatus::exited(0)));

        let report = trigger().with_runner(&runner).run().await.unwrap();

        assert_eq!(report.target, DeployTarget::Github);
        assert_eq!(report.output_dir, PathBuf::from("docs/.vitepress/dist"));
        assert_eq!(runner.calls().len(), 1);
    }

    #[tokio::test]
    async fn maps_nonzero_exit_to_error() {
        let runner = RecordingRunner::new(|| Ok(RunStatus::exited(2)));

        let err = trigger().with_runner(&runner).run().await.unwrap_err();

        assert!(matches!(err, BuildError::Exited { code: 2, .. }));
        assert_eq!(
            err.to_string(),
            format!("`{} vitepress build docs` exited with status 2", NPX)
        );
    }

    #[tokio::test]
    async fn maps_spawn_failure_to_error() {
        let runner = RecordingRunner::new(|| {
            Err(io::Error::new(io::ErrorKind::NotFound, "program not found"))
        });

        let err = trigger().with_runner(&runner).run().await.unwrap_err();

        assert!(matches!(err, BuildError::Spawn { .. }));
        assert!(err.to_string().contains("program not found"));
    }

    #[tokio::test]
    async fn maps_signal_to_error() {
        let runner = RecordingRunner::new(|| Ok(RunStatus::signaled()));

        let err = trigger().with_runner(&runner).run().await.unwrap_err();

        assert!(matches!(err, BuildError::Terminated { .. }));
    }

    #[tokio::test]
    async fn invokes_once_with_deploy_type_on_every_path() {
        let outcomes: [fn() -> io::Result<RunStatus>; 4] = [
            || Ok(RunStatus::exited(0)),
            || Ok(RunStatus::exited(1)),
            || Ok(RunStatus::signaled()),
            || Err(io::Error::other("boom")),
        ];

        for outcome in outcomes {
            let runner = RecordingRunner::new(outcome);
            let _ = trigger().with_runner(&runner).run().await;

            let calls = runner.calls();
            assert_eq!(calls.len(), 1);
            assert_eq!(calls[0].env_var(DEPLOY_TYPE_VAR), Some("github"));
        }
    }
}

//! Build trigger for deploying a static documentation site.
//!
//! Tells an external static-site generator which hosting destination it is
//! building for, runs it once, and reports where the output should be.

pub mod command;
pub mod runner;
pub mod target;
pub mod trigger;

pub use command::{BuildCommand, Invocation};
pub use runner::{ProcessRunner, RunStatus, Runner};
pub use target::{DeployTarget, UnknownTarget, DEPLOY_TYPE_VAR};
pub use trigger::{BuildError, BuildReport, BuildTrigger};

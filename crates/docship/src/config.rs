//! Configuration file structure (deploy.toml).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::Result;
use docship_trigger::{BuildCommand, DeployTarget};
use serde::Deserialize;

#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    deploy: DeployConfig,
    #[serde(default)]
    build: BuildSettings,
}

#[derive(Debug, Deserialize, Default)]
struct DeployConfig {
    #[serde(default)]
    target: DeployTarget,
    /// Overrides the target's base path in status output
    base: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct BuildSettings {
    command: Option<String>,
    args: Option<Vec<String>>,
    output: Option<PathBuf>,
}

impl ConfigFile {
    pub fn target(&self) -> DeployTarget {
        self.deploy.target
    }

    pub fn base_path(&self) -> String {
        self.deploy
            .base
            .clone()
            .unwrap_or_else(|| self.deploy.target.default_base_path().to_string())
    }

    /// The generator command, with unset fields taken from the VitePress default.
    pub fn build_command(&self) -> BuildCommand {
        let default = BuildCommand::default();
        BuildCommand {
            program: self.build.command.clone().unwrap_or(default.program),
            args: self.build.args.clone().unwrap_or(default.args),
            output_dir: self.build.output.clone().unwrap_or(default.output_dir),
        }
    }
}

/// Config file picked up from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG: &str = "deploy.toml";

/// Load configuration from an explicit path, or from `deploy.toml` if present.
///
/// An explicit path must exist. Any file that exists but cannot be read or
/// parsed is an error.
pub fn load_config(path: Option<&Path>) -> Result<ConfigFile> {
    match path {
        Some(path) => read_config(path, true),
        None => read_config(Path::new(DEFAULT_CONFIG), false),
    }
}

fn read_config(path: &Path, required: bool) -> Result<ConfigFile> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound && !required => {
            tracing::debug!("No {} found, using defaults", path.display());
            return Ok(ConfigFile::default());
        }
        Err(e) => anyhow::bail!("Failed to read {}: {}", path.display(), e),
    };
    let config: ConfigFile = toml::from_str(&content)
        .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))?;
    tracing::info!("Loaded config from {}", path.display());
    Ok(config)
}

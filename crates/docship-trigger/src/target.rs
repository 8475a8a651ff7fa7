//! Deployment targets.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Environment variable the generator reads to pick its base path.
pub const DEPLOY_TYPE_VAR: &str = "DEPLOY_TYPE";

/// Hosting destination the site is built for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum DeployTarget {
    /// GitHub Pages, served from a repository sub-path.
    #[default]
    Github,
}

impl DeployTarget {
    /// Identifier passed to the generator through `DEPLOY_TYPE`.
    pub fn id(&self) -> &'static str {
        match self {
            DeployTarget::Github => "github",
        }
    }

    /// Human-readable name used in status messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            DeployTarget::Github => "GitHub Pages",
        }
    }

    /// Base path the generator applies for this target.
    pub fn default_base_path(&self) -> &'static str {
        match self {
            DeployTarget::Github => "/WHartTest/",
        }
    }
}

impl fmt::Display for DeployTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown deployment target: {0}")]
pub struct UnknownTarget(pub String);

impl FromStr for DeployTarget {
    type Err = UnknownTarget;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "github" => Ok(DeployTarget::Github),
            _ => Err(UnknownTarget(s.to_string())),
        }
    }
}

impl TryFrom<String> for DeployTarget {
    type Error = UnknownTarget;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

//! External build command description.

use std::fmt;
use std::path::PathBuf;

/// npx ships as a batch shim on Windows, which `CreateProcess` will not find
/// without the extension.
#[cfg(windows)]
pub(crate) const NPX: &str = "npx.cmd";
#[cfg(not(windows))]
pub(crate) const NPX: &str = "npx";

/// The generator command and the directory it writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildCommand {
    /// Program to execute (resolved through `PATH`)
    pub program: String,

    /// Arguments passed to the program
    pub args: Vec<String>,

    /// Directory the generator is expected to populate
    pub output_dir: PathBuf,
}

impl Default for BuildCommand {
    fn default() -> Self {
        Self {
            program: NPX.to_string(),
            args: vec![
                "vitepress".to_string(),
                "build".to_string(),
                "docs".to_string(),
            ],
            output_dir: PathBuf::from("docs/.vitepress/dist"),
        }
    }
}

/// A fully resolved subprocess call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,

    /// Variables set on the child on top of the inherited environment
    pub env: Vec<(String, String)>,
}

impl Invocation {
    /// Look up an environment override by name.
    pub fn env_var(&self, key: &str) -> Option<&str> {
        self.env
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            if arg.is_empty() || arg.contains(char::is_whitespace) || arg.contains('"') {
                write!(f, " {:?}", arg)?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

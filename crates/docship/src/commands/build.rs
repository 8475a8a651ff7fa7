//! Site build command.

use std::path::Path;

use anyhow::Result;
use docship_trigger::BuildTrigger;

use crate::config::load_config;

/// Run the build command.
pub async fn run(config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;

    let trigger = BuildTrigger::new(config.target(), config.build_command())
        .with_base_path(config.base_path());

    trigger.run().await?;

    Ok(())
}

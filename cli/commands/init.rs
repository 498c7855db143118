use anyhow::Result;
use log;
use mdcontext_core::Config;
use std::path::Path;

use crate::output;

pub fn handle_init_command(config_path: &Path, quiet: bool) -> Result<()> {
    Config::init_file(config_path)?;
    log::debug!("Bootstrap configuration saved");
    output::print_success(
        &format!("Default config created at {}", config_path.display()),
        quiet,
    );
    Ok(())
}

use crate::cli_args::GenerateArgs;
use crate::output;
use anyhow::{Context, Result};
use log;
use mdcontext_core::{self as core, Config};
use std::path::Path;

pub fn handle_generate_command(
    args: &GenerateArgs,
    config: &Config,
    base_dir: &Path,
    quiet: bool,
) -> Result<()> {
    log::info!("Starting generation in: {}", base_dir.display());

    if args.stdout {
        log::debug!("Rendering {} document(s) to stdout", config.documents.len());
        let text = core::render_all(config, base_dir).context("Failed to render documents")?;
        return output::write_to_stdout(&text);
    }

    let written = core::generate(config, base_dir).context("Generation failed")?;
    for path in &written {
        output::print_written(path, quiet);
    }
    output::print_success("Generation completed", quiet);
    Ok(())
}

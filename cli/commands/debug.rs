use crate::output::{print_path_list, print_section};
use anyhow::{Context, Result};
use colored::*;
use log;
use mdcontext_core::{self as core, Config};
use std::path::Path;

pub fn handle_debug_command(config: &Config, base_dir: &Path) -> Result<()> {
    let root = config.resolve_project_root(base_dir);
    log::info!("Project root resolved: {}", root.display());

    print_section("Effective Configuration");
    let config_yaml =
        serde_yml::to_string(config).context("Failed to serialize effective config to YAML")?;
    println!("{}", config_yaml);

    for doc in &config.documents {
        print_section(&format!(
            "{} -> {}",
            display_or(&doc.description, "(untitled)"),
            doc.output_path.display()
        ));
        for (i, source) in doc.sources.iter().enumerate() {
            println!(
                "{} {} {} {}",
                format!("[{}]", i + 1).bold(),
                source.source_type.blue(),
                display_or(&source.file_pattern, "*").yellow(),
                format!("{:?}", source.source_paths).dimmed()
            );
            log::debug!("Debug: collecting source {} of '{}'", i + 1, doc.description);
            let files = core::collect_source(source, &root).with_context(|| {
                format!("Failed to collect files for {:?}", source.source_type)
            })?;
            print_path_list(&files);
        }
    }

    println!("{}", "\n--- End Debug Info ---".green().bold());
    Ok(())
}

fn display_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() { fallback } else { value }
}

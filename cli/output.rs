use anyhow::{Context, Result};
use colored::*;
use std::io::{self, Write};
use std::path::Path;

pub fn print_written(path: &Path, quiet: bool) {
    if !quiet {
        println!(
            "{} Wrote: {}",
            "✅".green(),
            path.display().to_string().blue()
        );
    }
}

pub fn print_success(message: &str, quiet: bool) {
    if !quiet {
        println!("{}", message.green().bold());
    }
}

pub fn print_section(title: &str) {
    println!(
        "{}",
        format!("\n--- {} ---", title).green().bold().underline()
    );
}

pub fn print_path_list(paths: &[String]) {
    if paths.is_empty() {
        println!("{}", "(none)".dimmed());
    } else {
        paths.iter().for_each(|p| println!("- {}", p.cyan()));
    }
}

/// Writes `content` verbatim; Markdown already ends in a newline.
pub fn write_to_stdout(content: &str) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    handle
        .write_all(content.as_bytes())
        .context("Failed to write to stdout")?;
    handle.flush().context("Failed to flush stdout")?;
    Ok(())
}

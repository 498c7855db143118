mod cli_args;
mod commands;
mod output;

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use log;
use std::path::PathBuf;
use std::process;

use cli_args::{Cli, Commands};
use mdcontext_core::{AppError, Config};

fn main() {
    let cli_args = Cli::parse();

    setup_logging(cli_args.quiet, cli_args.verbose);

    let quiet = cli_args.quiet;

    log::debug!("CLI args parsed: {:?}", cli_args);

    let exit_code = match run_app(cli_args, quiet) {
        Ok(_) => {
            log::info!("Application finished successfully.");
            0
        }
        Err(e) => {
            let exit_code = exit_code_for(&e);
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            exit_code
        }
    };
    log::debug!("Exiting with code {}", exit_code);
    process::exit(exit_code);
}

fn exit_code_for(err: &anyhow::Error) -> i32 {
    let Some(core_err) = err.downcast_ref::<AppError>() else {
        return 1;
    };
    match core_err.root_cause() {
        AppError::ConfigRead { .. }
        | AppError::ConfigParse { .. }
        | AppError::YamlError(_)
        | AppError::ConfigExists(_) => 1,
        AppError::PathResolution { .. }
        | AppError::Stat { .. }
        | AppError::WalkDir { .. }
        | AppError::FileRead { .. }
        | AppError::FileWrite { .. }
        | AppError::DirCreation { .. }
        | AppError::NotADirectory(_) => 2,
        AppError::Glob(_) | AppError::GlobExpansion { .. } => 3,
        AppError::UnknownSourceType(_) => 4,
        _ => 1,
    }
}

fn setup_logging(quiet: bool, verbose: u8) {
    let log_level = if quiet {
        log::LevelFilter::Off
    } else {
        match verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    };
    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp(None)
        .init();
    log::trace!("Logger initialized with level: {:?}", log_level);
}

fn run_app(cli: Cli, quiet: bool) -> Result<()> {
    let base_dir = resolve_base_dir(cli.project_root.as_deref())?;
    let config_path = expand_path(&cli.config);
    log::debug!(
        "Base directory: {}, config: {}",
        base_dir.display(),
        config_path.display()
    );

    match cli.command {
        Commands::Init => {
            log::debug!("Executing 'init' command...");
            commands::init::handle_init_command(&config_path, quiet)?;
        }
        Commands::Generate(args) => {
            log::debug!("Executing 'generate' command...");
            let config = load_config(&config_path)?;
            commands::generate::handle_generate_command(&args, &config, &base_dir, quiet)?;
        }
        Commands::Debug => {
            log::debug!("Executing 'debug' command...");
            let config = load_config(&config_path)?;
            commands::debug::handle_debug_command(&config, &base_dir)?;
        }
        Commands::Completion(args) => {
            log::debug!("Executing 'completion' command...");
            commands::completion::handle_completion_command(&args)?;
        }
    }
    Ok(())
}

fn expand_path(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).as_ref())
}

fn resolve_base_dir(project_root: Option<&str>) -> Result<PathBuf> {
    match project_root {
        Some(p) => Ok(expand_path(p)),
        None => std::env::current_dir().context("Failed to determine current directory"),
    }
}

fn load_config(config_path: &std::path::Path) -> Result<Config> {
    Config::load_from_path(config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))
}

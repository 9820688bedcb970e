use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use clap::Parser;
use log::{error, info, warn, LevelFilter};
use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode, WriteLogger};

use case_loader::cli::{Args, Commands};
use case_loader::config::{load_or_create_config, LoadConfig};
use case_loader::constants::{FILE_TIMESTAMP_FORMAT, LOG_BANNER_WIDTH};
use case_loader::loader::process_directory;
use case_loader::utils::{report, summary};

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Failures before the logger is up still need to reach the user
            if log::max_level() == LevelFilter::Off {
                eprintln!("Fatal error: {:?}", e);
            } else {
                error!("Fatal error: {:?}", e);
            }
            ExitCode::from(1)
        }
    }
}

fn run(args: &Args) -> Result<()> {
    if let Some(cmd) = &args.command {
        initialize_terminal_logging(args.verbose)?;
        return handle_subcommand(cmd);
    }

    let config = load_and_process_config(args)?;
    let started = Local::now();
    let log_file = initialize_logging(&config.log_dir(), started, args.verbose)?;

    banner();
    info!("Starting Overnight File Load Process");
    banner();
    info!("Source Directory: {}", config.source_dir.display());
    info!("Repository Directory: {}", config.repo_dir.display());
    info!("Log File: {}", log_file.display());

    let stats = process_directory(&config);
    let report_path = report::create_load_report(&config)?;

    if let Err(e) = summary::write_load_summary(&config, started, &stats, Some(&report_path)) {
        warn!("Failed to write load summary: {:#}", e);
    }

    banner();
    info!("Overnight load process completed successfully");
    banner();
    Ok(())
}

/// Handle subcommands (init-config)
fn handle_subcommand(cmd: &Commands) -> Result<()> {
    match cmd {
        Commands::InitConfig { path } => {
            info!("Creating default configuration file at {}", path.display());
            LoadConfig::default().save_to_yaml_file(path)?;
            info!("Configuration created successfully");
            Ok(())
        }
    }
}

/// Load configuration, apply command-line overrides and expand variables
fn load_and_process_config(args: &Args) -> Result<LoadConfig> {
    let mut config = load_or_create_config(args.config.as_deref())?;

    if let Some(source) = &args.source {
        config.source_dir = source.clone();
    }
    if let Some(repo) = &args.repo {
        config.repo_dir = repo.clone();
    }

    config.process_environment_variables();
    Ok(config)
}

fn log_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Log to the terminal and to `<log_dir>/load_<timestamp>.log`
fn initialize_logging(log_dir: &Path, started: DateTime<Local>, verbose: bool) -> Result<PathBuf> {
    fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

    let log_path = log_dir.join(format!("load_{}.log", started.format(FILE_TIMESTAMP_FORMAT)));
    let log_file = fs::File::create(&log_path)
        .with_context(|| format!("Failed to create log file: {}", log_path.display()))?;

    let level = log_level(verbose);
    CombinedLogger::init(vec![
        TermLogger::new(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto),
        WriteLogger::new(level, Config::default(), log_file),
    ])
    .context("Failed to initialize logger")?;

    Ok(log_path)
}

/// Terminal-only logging for subcommands
fn initialize_terminal_logging(verbose: bool) -> Result<()> {
    TermLogger::init(
        log_level(verbose),
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .context("Failed to initialize logger")?;
    Ok(())
}

fn banner() {
    info!("{}", "=".repeat(LOG_BANNER_WIDTH));
}

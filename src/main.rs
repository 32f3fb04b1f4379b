//! process-finder - version 0.1.0
//!
//! Process discovery CLI with tracing logging.
//! This is the main entry point that resolves configuration and dispatches subcommands.

mod cli;
mod commands;
mod config;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::level_filters::LevelFilter;
use tracing::{debug, info};

use cli::{Args, Commands, LogLevel};
use commands::{command_check, command_config, command_list, command_pid};
use config::{render_config, resolve_config, validate_effective_config, Config};

/// Initializes tracing logging subsystem with configured log level.
/// CLI flag > config file > warn.
fn setup_logging(config: &Config, args: &Args) -> anyhow::Result<()> {
    let level = args
        .log_level
        .clone()
        .or_else(|| {
            config
                .log_level
                .as_deref()
                .and_then(|s| LogLevel::from_str(s, true).ok())
        })
        .unwrap_or(LogLevel::Warn);

    let filter = match level {
        LogLevel::Off => LevelFilter::OFF,
        LogLevel::Error => LevelFilter::ERROR,
        LogLevel::Warn => LevelFilter::WARN,
        LogLevel::Info => LevelFilter::INFO,
        LogLevel::Debug => LevelFilter::DEBUG,
        LogLevel::Trace => LevelFilter::TRACE,
    };

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    debug!("Logging initialized with level: {:?}", level);
    Ok(())
}

/// Main application entry point.
fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Generating a default config needs no effective config
    if let Commands::Config {
        output,
        format,
        commented,
    } = &args.command
    {
        return command_config(output.clone(), format.clone(), *commented);
    }

    let config = resolve_config(&args)?;
    setup_logging(&config, &args)?;

    if let Commands::ShowConfig { format, check } = &args.command {
        if let Err(e) = validate_effective_config(&config) {
            eprintln!("❌ Configuration invalid: {}", e);
            std::process::exit(1);
        }
        if *check {
            println!("✅ Configuration is valid");
        } else {
            print!("{}", render_config(&config, format)?);
        }
        return Ok(());
    }

    // check reports invalid config itself
    if !matches!(args.command, Commands::Check) {
        if let Err(e) = validate_effective_config(&config) {
            eprintln!("❌ Configuration invalid: {}", e);
            std::process::exit(1);
        }
    }

    info!(
        "Using process directory {} (own identifier: {})",
        config.proc_root().display(),
        config.own_identifier()
    );

    match &args.command {
        Commands::List { mode, format } => command_list(*mode, *format, &config),
        Commands::Pid { identifier } => command_pid(identifier, &config),
        Commands::Check => command_check(&config),
        Commands::ShowConfig { .. } => unreachable!("ShowConfig handled above"),
        Commands::Config { .. } => unreachable!("Config handled above"),
    }
}

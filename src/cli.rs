//! CLI arguments and subcommands for process-finder.
//!
//! This module defines the command-line interface structure using the clap library,
//! including all flags, options, and subcommands.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Log level options for CLI parsing
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Configuration format options for output
#[derive(Debug, Clone, ValueEnum)]
pub enum ConfigFormat {
    Yaml,
    Json,
    Toml,
}

/// Output format for process listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Yaml,
}

/// Privilege mode selection; `auto` checks the effective uid
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Auto,
    Privileged,
    Restricted,
}

/// Main CLI arguments structure
#[derive(Parser, Debug)]
#[command(
    name = "process-finder",
    about = "Discover live processes and name them, with or without root",
    long_about = "Discover live processes and name them, with or without root.\n\n\
                  With root, processes come from the process-listing service and are labelled \
                  from a package catalog. Without root, names come straight from procfs \
                  comm and cmdline files.",
    version = "0.1.0",
    propagate_version = true
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Log level (default: config file value, then warn)
    #[arg(long, value_enum, global = true)]
    pub log_level: Option<LogLevel>,

    /// Config file (YAML/JSON/TOML)
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable all config file loading
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Process directory root (default: /proc)
    #[arg(long, global = true)]
    pub proc_root: Option<PathBuf>,

    /// Own application identifier, excluded from results
    #[arg(long, global = true)]
    pub own_identifier: Option<String>,

    /// Package catalog file (YAML/JSON/TOML)
    #[arg(long, global = true)]
    pub package_catalog: Option<PathBuf>,

    /// Android-style packages.list file
    #[arg(long, global = true)]
    pub packages_list: Option<PathBuf>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List running processes with their display names
    List {
        /// Privilege mode
        #[arg(short = 'm', long, value_enum)]
        mode: Option<ModeArg>,

        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Print the PID of the first process whose command line contains IDENTIFIER
    Pid {
        /// Package identifier (substring match)
        identifier: String,
    },

    /// Check process directory access, privileges and package catalogs
    Check,

    /// Print or validate the effective configuration
    ShowConfig {
        /// Output format
        #[arg(long, value_enum, default_value = "yaml")]
        format: ConfigFormat,

        /// Validate only (exit code 1 on error)
        #[arg(long)]
        check: bool,
    },

    /// Generate a default configuration file
    Config {
        /// Output file path ("-" for stdout)
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "yaml")]
        format: ConfigFormat,

        /// Include comments and examples
        #[arg(long)]
        commented: bool,
    },
}

//! Configuration management for process-finder.
//!
//! This module handles loading, merging, and validating configuration from files
//! and CLI arguments. It supports YAML, JSON, and TOML formats.

use crate::cli::{Args, ConfigFormat, ModeArg};
use anyhow::{bail, Context};
use process_finder::catalog::{
    ChainedResolver, PackagesListCatalog, StaticCatalog, DEFAULT_PACKAGES_LIST,
};
use process_finder::process::DEFAULT_PROC_ROOT;
use process_finder::{PrivilegeMode, RealProcFs};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

// Default configuration constants
pub const DEFAULT_OWN_IDENTIFIER: &str = env!("CARGO_PKG_NAME");
pub const DEFAULT_PRIVILEGE_MODE: &str = "auto";

/// Effective configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Process directory root
    #[serde(alias = "proc-root")]
    pub proc_root: Option<PathBuf>,

    /// Identifier excluded from every listing
    #[serde(alias = "own-identifier")]
    pub own_identifier: Option<String>,

    /// "auto" | "privileged" | "restricted"
    #[serde(alias = "privilege-mode")]
    pub privilege_mode: Option<String>,

    /// Package catalog file with labels
    #[serde(alias = "package-catalog")]
    pub package_catalog: Option<PathBuf>,

    /// Android-style packages.list
    #[serde(alias = "packages-list")]
    pub packages_list: Option<PathBuf>,

    // Logging
    pub log_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            proc_root: Some(PathBuf::from(DEFAULT_PROC_ROOT)),
            own_identifier: Some(DEFAULT_OWN_IDENTIFIER.to_string()),
            privilege_mode: Some(DEFAULT_PRIVILEGE_MODE.to_string()),
            package_catalog: None,
            packages_list: None,
            log_level: Some("warn".into()),
        }
    }
}

impl Config {
    pub fn proc_root(&self) -> PathBuf {
        self.proc_root
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PROC_ROOT))
    }

    pub fn own_identifier(&self) -> &str {
        self.own_identifier
            .as_deref()
            .unwrap_or(DEFAULT_OWN_IDENTIFIER)
    }

    pub fn procfs(&self) -> RealProcFs {
        RealProcFs::new(self.proc_root())
    }

    /// Resolves the privilege mode; `override_mode` wins over the config.
    pub fn effective_mode(&self, override_mode: Option<ModeArg>) -> PrivilegeMode {
        let explicit = match override_mode {
            Some(ModeArg::Privileged) => Some(PrivilegeMode::Privileged),
            Some(ModeArg::Restricted) => Some(PrivilegeMode::Restricted),
            Some(ModeArg::Auto) => None,
            None => match self.privilege_mode.as_deref() {
                None | Some("auto") => None,
                // Validated beforehand
                Some(other) => other.parse().ok(),
            },
        };
        explicit.unwrap_or_else(PrivilegeMode::detect)
    }

    /// Builds the package resolver chain: catalog file first, then
    /// packages.list (configured, or the system default when present).
    pub fn build_resolver(&self) -> anyhow::Result<ChainedResolver> {
        let mut chain = ChainedResolver::new();

        if let Some(path) = &self.package_catalog {
            chain.push(StaticCatalog::load(path)?);
        }

        let packages_list = self.packages_list.clone().or_else(|| {
            let default = PathBuf::from(DEFAULT_PACKAGES_LIST);
            default.exists().then_some(default)
        });
        if let Some(path) = packages_list {
            match PackagesListCatalog::load(&path) {
                Ok(catalog) => chain.push(catalog),
                Err(e) if self.packages_list.is_some() => return Err(e.into()),
                Err(e) => warn!("Ignoring default packages.list: {}", e),
            }
        }

        if chain.is_empty() {
            warn!("No package catalog configured - privileged listings will be empty");
        }
        Ok(chain)
    }
}

/// Validate effective config
pub fn validate_effective_config(cfg: &Config) -> anyhow::Result<()> {
    if cfg.own_identifier.as_deref().is_some_and(str::is_empty) {
        bail!("own_identifier must not be empty");
    }

    if cfg
        .proc_root
        .as_ref()
        .is_some_and(|p| p.as_os_str().is_empty())
    {
        bail!("proc_root must not be empty");
    }

    if let Some(mode) = cfg.privilege_mode.as_deref() {
        if mode != "auto" {
            if let Err(e) = mode.parse::<PrivilegeMode>() {
                bail!("{} (or 'auto')", e);
            }
        }
    }

    if let Some(path) = &cfg.package_catalog {
        if !path.exists() {
            bail!("Package catalog file not found: {}", path.display());
        }
    }

    if let Some(path) = &cfg.packages_list {
        if !path.exists() {
            bail!("packages.list file not found: {}", path.display());
        }
    }

    Ok(())
}

/// Resolves configuration from CLI args, config file, and defaults.
/// This enforces precedence: CLI (if provided) > config file > default.
pub fn resolve_config(args: &Args) -> anyhow::Result<Config> {
    let mut config = if args.no_config {
        Config::default()
    } else {
        load_config(args.config.as_deref())?
    };

    if let Some(root) = &args.proc_root {
        config.proc_root = Some(root.clone());
    }
    if let Some(id) = &args.own_identifier {
        config.own_identifier = Some(id.clone());
    }
    if let Some(path) = &args.package_catalog {
        config.package_catalog = Some(path.clone());
    }
    if let Some(path) = &args.packages_list {
        config.packages_list = Some(path.clone());
    }

    Ok(config)
}

/// Configuration loading with multiple format support
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let path = match path {
        Some(p) => {
            if !p.exists() {
                bail!("Config file not found: {}", p.display());
            }
            p.to_path_buf()
        }
        None => {
            // Try default locations
            let defaults = [
                "/etc/process-finder/config.yaml",
                "/etc/process-finder/config.yml",
                "./process-finder.yaml",
                "./process-finder.yml",
                "./process-finder.json",
            ];

            match defaults.iter().find(|p| Path::new(p).exists()) {
                Some(p) => PathBuf::from(p),
                None => return Ok(Config::default()),
            }
        }
    };

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;

    let config: Config = match path.extension().and_then(|s| s.to_str()) {
        Some("json") => serde_json::from_str(&content)
            .with_context(|| format!("Invalid JSON config {}", path.display()))?,
        Some("toml") => toml::from_str(&content)
            .with_context(|| format!("Invalid TOML config {}", path.display()))?,
        _ => {
            // Default to YAML
            serde_yaml::from_str(&content)
                .with_context(|| format!("Invalid YAML config {}", path.display()))?
        }
    };
    info!("Loaded configuration from: {}", path.display());
    Ok(config)
}

/// Renders configuration in the requested format
pub fn render_config(config: &Config, format: &ConfigFormat) -> anyhow::Result<String> {
    let output = match format {
        ConfigFormat::Json => serde_json::to_string_pretty(config)?,
        ConfigFormat::Toml => toml::to_string_pretty(config)?,
        ConfigFormat::Yaml => serde_yaml::to_string(config)?,
    };
    Ok(output)
}

//! Config command implementation.
//!
//! Generates configuration files in various formats.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;

use crate::cli::ConfigFormat;
use crate::config::{render_config, Config};

/// Generates configuration files.
pub fn command_config(
    output: Option<PathBuf>,
    format: ConfigFormat,
    commented: bool,
) -> anyhow::Result<()> {
    let config = Config::default();
    let output = output.unwrap_or_else(|| PathBuf::from("process-finder.yaml"));

    let mut content = render_config(&config, &format)?;
    if commented && matches!(format, ConfigFormat::Yaml) {
        content = add_config_comments(content);
    }

    if output.to_string_lossy() == "-" {
        print!("{}", content);
    } else {
        fs::write(&output, content)
            .with_context(|| format!("Failed to write {}", output.display()))?;
        println!("✅ Configuration written to: {}", output.display());
    }

    Ok(())
}

/// Adds comments to YAML configuration.
fn add_config_comments(yaml: String) -> String {
    let comments = r#"# Process Finder Configuration
# ============================
#
# Discovery
# ---------
# proc_root: /proc                # Process directory root
# own_identifier: process-finder  # Excluded from every listing (substring in restricted mode)
# privilege_mode: auto            # auto, privileged, restricted
#
# Package Metadata
# ----------------
# package_catalog: null           # YAML/JSON/TOML file with [[packages]] name/label/valid
# packages_list: null             # Android-style packages.list (default: /data/system/packages.list if present)
#
# Logging
# -------
# log_level: "warn"               # off, error, warn, info, debug, trace
"#;

    format!("{comments}\n{yaml}")
}

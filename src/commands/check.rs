//! Check command implementation.
//!
//! Validates process directory access, privileges and package catalogs.

use nix::unistd::geteuid;

use crate::config::{validate_effective_config, Config};
use process_finder::process::collect_pid_entries;
use process_finder::process::scanner::read_cmdline;
use process_finder::{PackageResolver, PrivilegeMode};

/// Validates system requirements and configuration.
pub fn command_check(config: &Config) -> anyhow::Result<()> {
    println!("🔍 Process Finder - System Check");
    println!("================================");

    let mut all_ok = true;

    println!("\n⚙️  Checking configuration...");
    match validate_effective_config(config) {
        Ok(_) => println!("   ✅ Configuration is valid"),
        Err(e) => {
            println!("   ❌ Configuration invalid: {}", e);
            all_ok = false;
        }
    }

    let root = config.proc_root();
    println!("\n📁 Checking process directory {}...", root.display());
    let procfs = config.procfs();
    let count = collect_pid_entries(&procfs).len();
    if count == 0 {
        println!("   ❌ Cannot read any process entries");
        all_ok = false;
    } else {
        println!("   ✅ Found {} process entries", count);

        let own_pid = std::process::id().to_string();
        match read_cmdline(&procfs, &own_pid) {
            Ok(_) => println!("   ✅ Own cmdline readable (PID {})", own_pid),
            Err(e) => println!("   ⚠️  Own cmdline not readable: {}", e),
        }
    }

    println!("\n🔐 Checking privileges...");
    if geteuid().is_root() {
        println!("   ✅ Running as root - privileged mode available");
    } else {
        println!("   ⚠️  Not running as root - only restricted mode is reliable");
    }
    println!("   ℹ️  Effective mode: {}", config.effective_mode(None));

    println!("\n📦 Checking package catalogs...");
    match config.build_resolver() {
        Ok(resolver) if resolver.is_empty() => {
            println!("   ⚠️  No package catalog configured");
            if config.effective_mode(None) == PrivilegeMode::Privileged {
                println!("      Privileged listings will be empty");
            }
        }
        Ok(resolver) => {
            println!("   ✅ {} package catalog(s) loaded", resolver.len());
            if resolver.resolve(config.own_identifier()).is_ok() {
                println!(
                    "   ℹ️  Own identifier '{}' is catalogued and will be excluded",
                    config.own_identifier()
                );
            }
        }
        Err(e) => {
            println!("   ❌ Failed to load package catalogs: {}", e);
            all_ok = false;
        }
    }

    println!("\n📋 Summary:");
    if all_ok {
        println!("   ✅ All checks passed");
        Ok(())
    } else {
        println!("   ❌ Some checks failed - please review warnings");
        std::process::exit(1);
    }
}

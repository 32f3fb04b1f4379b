//! Pid command implementation.

use crate::config::Config;
use process_finder::PidResolver;

/// Prints the PID for `identifier`, exiting with code 1 when none matches.
pub fn command_pid(identifier: &str, config: &Config) -> anyhow::Result<()> {
    let resolver = PidResolver::new(config.procfs());

    match resolver.resolve_pid(identifier) {
        Some(pid) => {
            println!("{}", pid);
            Ok(())
        }
        None => {
            eprintln!("❌ No process found for '{}'", identifier);
            std::process::exit(1);
        }
    }
}

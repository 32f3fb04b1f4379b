//! Package identifier to PID lookup.

use tracing::debug;

use crate::process::fs::ProcFs;
use crate::process::scanner::{collect_pid_entries, read_cmdline_raw};

/// Finds the process whose command line mentions a package identifier.
#[derive(Debug, Clone)]
pub struct PidResolver<F> {
    procfs: F,
}

impl<F: ProcFs> PidResolver<F> {
    pub fn new(procfs: F) -> Self {
        Self { procfs }
    }

    /// PID of the first entry, in directory order, whose raw command line
    /// contains `identifier`.
    ///
    /// This is a substring test: `com.example.app` also matches a process
    /// running `com.example.app.extra`. If the first match has a name that
    /// does not fit a `u32`, the lookup stops and returns `None`.
    pub fn resolve_pid(&self, identifier: &str) -> Option<u32> {
        let matched = collect_pid_entries(&self.procfs)
            .into_iter()
            .find(|pid| match read_cmdline_raw(&self.procfs, pid) {
                Ok(cmdline) => cmdline.contains(identifier),
                Err(e) => {
                    debug!(pid = %pid, "Skipping unreadable cmdline: {}", e);
                    false
                }
            });

        match matched {
            Some(name) => {
                let pid = name.parse::<u32>().ok();
                debug!("Resolved '{}' to entry {} ({:?})", identifier, name, pid);
                pid
            }
            None => {
                debug!("No process matches '{}'", identifier);
                None
            }
        }
    }
}

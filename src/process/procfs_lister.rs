//! Restricted-mode enumeration: read `comm` and `cmdline` straight from the
//! process directory.

use tracing::{debug, info};

use crate::error::SkipReason;
use crate::process::fs::ProcFs;
use crate::process::record::ProcessRecord;
use crate::process::scanner::{collect_pid_entries, read_cmdline, read_comm};

/// Command lines equal to this are never reported.
pub const SHELL_CMDLINE: &str = "sh";

/// Lists processes visible through a [`ProcFs`] without any elevated service.
#[derive(Debug, Clone)]
pub struct ProcfsProcessLister<F> {
    procfs: F,
    own_identifier: String,
}

impl<F: ProcFs> ProcfsProcessLister<F> {
    pub fn new(procfs: F, own_identifier: impl Into<String>) -> Self {
        Self {
            procfs,
            own_identifier: own_identifier.into(),
        }
    }

    /// Every readable, non-excluded process. Never fails.
    pub fn list(&self) -> Vec<ProcessRecord> {
        let entries = collect_pid_entries(&self.procfs);
        let total = entries.len();

        let records: Vec<ProcessRecord> = entries
            .iter()
            .map(|pid| (pid, self.read_entry(pid)))
            .filter_map(|(pid, result)| match result {
                Ok(record) => Some(record),
                Err(reason) => {
                    debug!(pid = %pid, "Skipping process: {}", reason);
                    None
                }
            })
            .collect();

        info!(
            "Procfs enumeration: {} of {} process entries reported",
            records.len(),
            total
        );
        records
    }

    fn read_entry(&self, pid: &str) -> Result<ProcessRecord, SkipReason> {
        let comm = read_comm(&self.procfs, pid)?;
        let cmdline = read_cmdline(&self.procfs, pid)?;

        if cmdline == SHELL_CMDLINE {
            return Err(SkipReason::Shell);
        }
        if cmdline.contains(self.own_identifier.as_str()) {
            return Err(SkipReason::OwnProcess);
        }

        Ok(ProcessRecord::new(cmdline, comm)?)
    }
}

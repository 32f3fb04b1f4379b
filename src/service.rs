//! Process-listing service backed by the process directory.
//!
//! App runtimes rename their processes by rewriting argv[0], so the first
//! command-line argument is the technical process name (`package` or
//! `package:tag`). Seeing every process this way needs root when procfs is
//! mounted with `hidepid`.

use std::io;

use tracing::debug;

use crate::process::fs::ProcFs;
use crate::process::scanner::{is_pid_name, read_argv0};
use crate::process::{ProcessService, RunningProcess};

#[derive(Debug, Clone)]
pub struct ProcfsProcessService<F> {
    procfs: F,
}

impl<F: ProcFs> ProcfsProcessService<F> {
    pub fn new(procfs: F) -> Self {
        Self { procfs }
    }
}

impl<F: ProcFs> ProcessService for ProcfsProcessService<F> {
    /// Fails only when the process directory itself cannot be listed.
    fn running_processes(&self) -> io::Result<Vec<RunningProcess>> {
        let mut out = Vec::new();

        for entry in self.procfs.entries()? {
            if !is_pid_name(&entry) {
                continue;
            }
            let pid: u32 = match entry.parse() {
                Ok(v) => v,
                Err(_) => continue,
            };

            match read_argv0(&self.procfs, &entry) {
                Ok(Some(process_name)) => out.push(RunningProcess { pid, process_name }),
                Ok(None) => continue,
                Err(e) => debug!(pid, "Process vanished before cmdline read: {}", e),
            }
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::RealProcFs;
    use std::fs;

    #[test]
    fn test_reports_argv0_of_numeric_entries() {
        let dir = tempfile::tempdir().unwrap();
        for (pid, cmdline) in [
            ("7", &b"com.example.app:worker\0"[..]),
            ("8", &b""[..]),
            ("self", &b"ignored\0"[..]),
        ] {
            let p = dir.path().join(pid);
            fs::create_dir(&p).unwrap();
            fs::write(p.join("cmdline"), cmdline).unwrap();
        }

        let service = ProcfsProcessService::new(RealProcFs::new(dir.path()));
        let processes = service.running_processes().unwrap();

        assert_eq!(
            processes,
            vec![RunningProcess {
                pid: 7,
                process_name: "com.example.app:worker".to_string(),
            }]
        );
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let service = ProcfsProcessService::new(RealProcFs::new(dir.path().join("none")));
        assert!(service.running_processes().is_err());
    }
}

//! Process scanning utilities for discovering and reading process entries from
//! a procfs-shaped directory.

use std::io;

use tracing::debug;

use crate::process::fs::ProcFs;

pub const COMM_FILE: &str = "comm";
pub const CMDLINE_FILE: &str = "cmdline";

/// True when a directory name looks like a process id.
pub fn is_pid_name(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|b| b.is_ascii_digit())
}

/// Lists numerically named entries, preserving directory iteration order.
///
/// An unreadable root yields an empty list.
pub fn collect_pid_entries<F: ProcFs>(procfs: &F) -> Vec<String> {
    match procfs.entries() {
        Ok(entries) => entries.into_iter().filter(|e| is_pid_name(e)).collect(),
        Err(e) => {
            debug!("Failed to list process directory: {}", e);
            Vec::new()
        }
    }
}

/// Removes every NUL byte, concatenating the argv pieces.
pub fn strip_nul(text: &str) -> String {
    text.replace('\0', "")
}

/// Reads the short command name, without NULs or the trailing newline.
pub fn read_comm<F: ProcFs>(procfs: &F, entry: &str) -> io::Result<String> {
    let bytes = procfs.read(entry, COMM_FILE)?;
    let text = strip_nul(&String::from_utf8_lossy(&bytes));
    Ok(text.trim_end_matches('\n').to_string())
}

/// Reads the command line as-is, NUL separators included.
pub fn read_cmdline_raw<F: ProcFs>(procfs: &F, entry: &str) -> io::Result<String> {
    let bytes = procfs.read(entry, CMDLINE_FILE)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Reads the command line with NUL separators stripped.
pub fn read_cmdline<F: ProcFs>(procfs: &F, entry: &str) -> io::Result<String> {
    read_cmdline_raw(procfs, entry).map(|raw| strip_nul(&raw))
}

/// First command-line argument, or `None` when argv is empty (kernel threads).
pub fn read_argv0<F: ProcFs>(procfs: &F, entry: &str) -> io::Result<Option<String>> {
    let bytes = procfs.read(entry, CMDLINE_FILE)?;
    let first = bytes.split(|&b| b == 0u8).next().unwrap_or_default();
    if first.is_empty() {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(first).into_owned()))
}

//! Process discovery, naming and PID lookup.
//!
//! This module provides:
//! - `record`: the `ProcessRecord` value and its display name
//! - `fs`: the `ProcFs` accessor for procfs-shaped directories
//! - `scanner`: PID entry discovery and `comm`/`cmdline` readers
//! - `procfs_lister`: restricted-mode enumeration
//! - `privileged`: privileged-mode enumeration via service and resolver traits
//! - `enumerator`: dispatch on `PrivilegeMode`
//! - `pid`: package identifier to PID resolution

pub mod enumerator;
pub mod fs;
pub mod pid;
pub mod privileged;
pub mod procfs_lister;
pub mod record;
pub mod scanner;

// Re-export commonly used types
pub use enumerator::{PrivilegeMode, ProcessEnumerator};
pub use fs::{ProcFs, RealProcFs, DEFAULT_PROC_ROOT};
pub use pid::PidResolver;
pub use privileged::{
    PackageInfo, PackageResolver, PrivilegedProcessLister, ProcessService, RunningProcess,
};
pub use procfs_lister::{ProcfsProcessLister, SHELL_CMDLINE};
pub use record::{ProcessRecord, RecordError};
pub use scanner::{collect_pid_entries, is_pid_name};

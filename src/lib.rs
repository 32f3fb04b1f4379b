//! Process Finder Library
//!
//! Discovers live processes and names them for people, under two privilege
//! regimes:
//!
//! - **Privileged**: a [`ProcessService`] snapshot of running processes,
//!   named through a [`PackageResolver`].
//! - **Restricted**: only the procfs directory is readable; each process is
//!   named by its `cmdline` and `comm` files.
//!
//! [`PidResolver`] maps a package identifier back to a PID by scanning the
//! same directory.
//!
//! # Usage
//!
//! ```rust,no_run
//! use process_finder::catalog::StaticCatalog;
//! use process_finder::service::ProcfsProcessService;
//! use process_finder::{PidResolver, PrivilegeMode, ProcessEnumerator, RealProcFs};
//!
//! let procfs = RealProcFs::default();
//! let enumerator = ProcessEnumerator::new(
//!     procfs.clone(),
//!     ProcfsProcessService::new(procfs.clone()),
//!     StaticCatalog::new(),
//!     "process-finder",
//! );
//!
//! for record in enumerator.enumerate(PrivilegeMode::Restricted) {
//!     println!("{} -> {}", record.process_name(), record.display_name());
//! }
//!
//! let pid = PidResolver::new(procfs).resolve_pid("com.example.app");
//! println!("{:?}", pid);
//! ```

pub mod catalog;
pub mod error;
pub mod process;
pub mod service;

// Re-export main types for convenience
pub use error::{CatalogError, ResolveError, SkipReason};
pub use process::{
    PackageInfo, PackageResolver, PidResolver, PrivilegeMode, PrivilegedProcessLister, ProcFs,
    ProcessEnumerator, ProcessRecord, ProcessService, ProcfsProcessLister, RealProcFs,
    RunningProcess,
};

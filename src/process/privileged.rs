//! Privileged-mode enumeration through an OS process-listing service and a
//! package metadata resolver.

use std::io;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{ResolveError, SkipReason};
use crate::process::record::ProcessRecord;

/// A live process as reported by a [`ProcessService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunningProcess {
    pub pid: u32,
    /// Technical name, possibly `package:tag` for secondary processes.
    pub process_name: String,
}

/// Snapshot source for running processes. Requires elevated privileges on
/// real systems.
pub trait ProcessService {
    fn running_processes(&self) -> io::Result<Vec<RunningProcess>>;
}

/// Metadata for an installed package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageInfo {
    pub package_name: String,
    pub label: String,
    pub is_valid: bool,
}

/// Maps a process or package name to its package metadata.
pub trait PackageResolver {
    fn resolve(&self, name: &str) -> Result<PackageInfo, ResolveError>;
}

impl<T: ProcessService + ?Sized> ProcessService for &T {
    fn running_processes(&self) -> io::Result<Vec<RunningProcess>> {
        (**self).running_processes()
    }
}

impl<T: PackageResolver + ?Sized> PackageResolver for &T {
    fn resolve(&self, name: &str) -> Result<PackageInfo, ResolveError> {
        (**self).resolve(name)
    }
}

impl<T: PackageResolver + ?Sized> PackageResolver for Box<T> {
    fn resolve(&self, name: &str) -> Result<PackageInfo, ResolveError> {
        (**self).resolve(name)
    }
}

/// Lists processes that belong to valid, foreign packages.
#[derive(Debug, Clone)]
pub struct PrivilegedProcessLister<S, R> {
    service: S,
    resolver: R,
    own_identifier: String,
}

impl<S: ProcessService, R: PackageResolver> PrivilegedProcessLister<S, R> {
    pub fn new(service: S, resolver: R, own_identifier: impl Into<String>) -> Self {
        Self {
            service,
            resolver,
            own_identifier: own_identifier.into(),
        }
    }

    /// Best-effort listing. A service failure yields an empty list.
    pub fn list(&self) -> Vec<ProcessRecord> {
        let processes = match self.service.running_processes() {
            Ok(p) => p,
            Err(e) => {
                warn!("Process listing service failed: {}", e);
                return Vec::new();
            }
        };
        let total = processes.len();

        let records: Vec<ProcessRecord> = processes
            .iter()
            .map(|p| (p, self.read_entry(p)))
            .filter_map(|(p, result)| match result {
                Ok(record) => Some(record),
                Err(reason) => {
                    debug!(pid = p.pid, name = %p.process_name, "Skipping process: {}", reason);
                    None
                }
            })
            .collect();

        info!(
            "Privileged enumeration: {} of {} running processes reported",
            records.len(),
            total
        );
        records
    }

    fn read_entry(&self, process: &RunningProcess) -> Result<ProcessRecord, SkipReason> {
        let info = self.resolver.resolve(&process.process_name)?;

        if !info.is_valid {
            return Err(SkipReason::InvalidPackage(info.package_name));
        }
        if info.package_name == self.own_identifier {
            return Err(SkipReason::OwnProcess);
        }

        Ok(ProcessRecord::new(process.process_name.as_str(), info.label)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::AHashMap as HashMap;

    struct FixedService(Vec<&'static str>);

    impl ProcessService for FixedService {
        fn running_processes(&self) -> io::Result<Vec<RunningProcess>> {
            Ok(self
                .0
                .iter()
                .enumerate()
                .map(|(i, name)| RunningProcess {
                    pid: 1000 + i as u32,
                    process_name: name.to_string(),
                })
                .collect())
        }
    }

    struct FailingService;

    impl ProcessService for FailingService {
        fn running_processes(&self) -> io::Result<Vec<RunningProcess>> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
        }
    }

    struct MapResolver(HashMap<&'static str, PackageInfo>);

    impl MapResolver {
        fn with(entries: &[(&'static str, &str, &str, bool)]) -> Self {
            let mut map = HashMap::new();
            for (name, pkg, label, valid) in entries {
                map.insert(
                    *name,
                    PackageInfo {
                        package_name: pkg.to_string(),
                        label: label.to_string(),
                        is_valid: *valid,
                    },
                );
            }
            Self(map)
        }
    }

    impl PackageResolver for MapResolver {
        fn resolve(&self, name: &str) -> Result<PackageInfo, ResolveError> {
            self.0
                .get(name)
                .cloned()
                .ok_or_else(|| ResolveError::NotFound(name.to_string()))
        }
    }

    #[test]
    fn test_lists_resolved_processes_with_labels() {
        let service = FixedService(vec!["com.example.app", "com.example.app:worker"]);
        let resolver = MapResolver::with(&[
            ("com.example.app", "com.example.app", "Example", true),
            ("com.example.app:worker", "com.example.app", "Example", true),
        ]);
        let lister = PrivilegedProcessLister::new(service, resolver, "com.self.app");

        let records = lister.list();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].process_name(), "com.example.app");
        assert_eq!(records[0].app_name(), "Example");
        assert_eq!(records[1].display_name(), "Example (worker)");
    }

    #[test]
    fn test_skips_unresolved_invalid_and_own() {
        let service = FixedService(vec![
            "com.unknown",
            "com.broken",
            "com.self.app",
            "com.example.app",
        ]);
        let resolver = MapResolver::with(&[
            ("com.broken", "com.broken", "Broken", false),
            ("com.self.app", "com.self.app", "Me", true),
            ("com.example.app", "com.example.app", "Example", true),
        ]);
        let lister = PrivilegedProcessLister::new(service, resolver, "com.self.app");

        let records = lister.list();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].process_name(), "com.example.app");
    }

    #[test]
    fn test_empty_label_skipped() {
        let service = FixedService(vec!["com.example.app"]);
        let resolver = MapResolver::with(&[("com.example.app", "com.example.app", "", true)]);
        let lister = PrivilegedProcessLister::new(service, resolver, "com.self.app");
        assert!(lister.list().is_empty());
    }

    #[test]
    fn test_service_failure_yields_empty() {
        let resolver = MapResolver::with(&[]);
        let lister = PrivilegedProcessLister::new(FailingService, resolver, "com.self.app");
        assert!(lister.list().is_empty());
    }
}

//! Dispatch between the privileged and procfs enumeration paths.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::process::fs::ProcFs;
use crate::process::privileged::{PackageResolver, PrivilegedProcessLister, ProcessService};
use crate::process::procfs_lister::ProcfsProcessLister;
use crate::process::record::ProcessRecord;

/// Which enumeration path to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrivilegeMode {
    /// Process-listing service plus package metadata.
    Privileged,
    /// Procfs only.
    Restricted,
}

impl PrivilegeMode {
    pub fn from_flag(privileged: bool) -> Self {
        if privileged {
            PrivilegeMode::Privileged
        } else {
            PrivilegeMode::Restricted
        }
    }

    /// Privileged when the effective uid is root.
    pub fn detect() -> Self {
        Self::from_flag(nix::unistd::geteuid().is_root())
    }
}

impl fmt::Display for PrivilegeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrivilegeMode::Privileged => write!(f, "privileged"),
            PrivilegeMode::Restricted => write!(f, "restricted"),
        }
    }
}

impl FromStr for PrivilegeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "privileged" | "root" => Ok(PrivilegeMode::Privileged),
            "restricted" | "noroot" => Ok(PrivilegeMode::Restricted),
            other => Err(format!(
                "Invalid privilege mode '{}', expected 'privileged' or 'restricted'",
                other
            )),
        }
    }
}

/// Runs exactly one of the two listers per call.
pub struct ProcessEnumerator<F, S, R> {
    procfs: ProcfsProcessLister<F>,
    privileged: PrivilegedProcessLister<S, R>,
}

impl<F, S, R> ProcessEnumerator<F, S, R>
where
    F: ProcFs,
    S: ProcessService,
    R: PackageResolver,
{
    pub fn new(procfs: F, service: S, resolver: R, own_identifier: impl Into<String>) -> Self {
        let own_identifier = own_identifier.into();
        Self {
            procfs: ProcfsProcessLister::new(procfs, own_identifier.clone()),
            privileged: PrivilegedProcessLister::new(service, resolver, own_identifier),
        }
    }

    pub fn from_listers(
        procfs: ProcfsProcessLister<F>,
        privileged: PrivilegedProcessLister<S, R>,
    ) -> Self {
        Self { procfs, privileged }
    }

    pub fn enumerate(&self, mode: PrivilegeMode) -> Vec<ProcessRecord> {
        debug!("Enumerating processes in {} mode", mode);
        match mode {
            PrivilegeMode::Privileged => self.privileged.list(),
            PrivilegeMode::Restricted => self.procfs.list(),
        }
    }

    pub fn enumerate_flag(&self, privileged: bool) -> Vec<ProcessRecord> {
        self.enumerate(PrivilegeMode::from_flag(privileged))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flag() {
        assert_eq!(PrivilegeMode::from_flag(true), PrivilegeMode::Privileged);
        assert_eq!(PrivilegeMode::from_flag(false), PrivilegeMode::Restricted);
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!(
            "privileged".parse::<PrivilegeMode>(),
            Ok(PrivilegeMode::Privileged)
        );
        assert_eq!("root".parse::<PrivilegeMode>(), Ok(PrivilegeMode::Privileged));
        assert_eq!(
            "restricted".parse::<PrivilegeMode>(),
            Ok(PrivilegeMode::Restricted)
        );
        assert!("auto".parse::<PrivilegeMode>().is_err());
        assert_eq!(PrivilegeMode::Restricted.to_string(), "restricted");
    }
}

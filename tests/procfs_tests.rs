//! Integration tests for restricted-mode enumeration.
//!
//! These tests build fixture process trees in temporary directories and
//! verify filtering, naming and race handling of `ProcfsProcessLister`.

use std::cell::Cell;
use std::fs;
use std::io;
use std::path::Path;

use process_finder::{ProcFs, ProcfsProcessLister, RealProcFs};

const OWN_ID: &str = "com.dumper.android";

/// Helper function to add a process directory with comm and cmdline files.
fn add_process(root: &Path, name: &str, comm: &str, cmdline: &[u8]) {
    let p = root.join(name);
    fs::create_dir(&p).unwrap();
    fs::write(p.join("comm"), comm).unwrap();
    fs::write(p.join("cmdline"), cmdline).unwrap();
}

/// Helper function to create a typical tree with reserved entries.
fn typical_tree() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();

    add_process(root, "1", "init\n", b"/init\0second_stage\0");
    add_process(root, "412", "sh\n", b"sh\0");
    add_process(root, "900", "example.app\n", b"com.example.app\0");
    add_process(root, "901", "app:worker\n", b"com.example.app:worker\0");
    add_process(root, "950", "dumper\n", b"com.dumper.android\0");
    add_process(root, "951", "su\n", b"su\0-c\0com.dumper.android.helper\0");

    // Reserved, non-numeric entries that look like processes
    add_process(root, "self", "self\n", b"com.self.reserved\0");
    add_process(root, "sys", "sys\n", b"com.sys.reserved\0");
    fs::write(root.join("uptime"), "1.0 1.0\n").unwrap();

    dir
}

#[test]
fn test_restricted_listing_contents() {
    let dir = typical_tree();
    let lister = ProcfsProcessLister::new(RealProcFs::new(dir.path()), OWN_ID);

    let mut names: Vec<(String, String)> = lister
        .list()
        .into_iter()
        .map(|r| (r.process_name().to_string(), r.app_name().to_string()))
        .collect();
    names.sort();

    assert_eq!(
        names,
        vec![
            ("/initsecond_stage".to_string(), "init".to_string()),
            ("com.example.app".to_string(), "example.app".to_string()),
            ("com.example.app:worker".to_string(), "app:worker".to_string()),
        ]
    );
}

#[test]
fn test_no_shell_or_own_identifier_in_results() {
    let dir = typical_tree();
    let lister = ProcfsProcessLister::new(RealProcFs::new(dir.path()), OWN_ID);

    for record in lister.list() {
        assert_ne!(record.process_name(), "sh");
        assert!(!record.process_name().contains(OWN_ID));
    }
}

#[test]
fn test_non_numeric_entries_never_listed() {
    let dir = typical_tree();
    let lister = ProcfsProcessLister::new(RealProcFs::new(dir.path()), OWN_ID);

    for record in lister.list() {
        assert!(!record.process_name().contains("reserved"));
    }
}

#[test]
fn test_display_name_from_restricted_record() {
    let dir = tempfile::tempdir().unwrap();
    add_process(dir.path(), "901", "Example\n", b"com.example.app:worker\0");
    let lister = ProcfsProcessLister::new(RealProcFs::new(dir.path()), OWN_ID);

    let records = lister.list();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].display_name(), "Example (worker)");
}

#[test]
fn test_consecutive_enumerations_are_equal() {
    let dir = typical_tree();
    let lister = ProcfsProcessLister::new(RealProcFs::new(dir.path()), OWN_ID);

    let first = lister.list();
    let second = lister.list();
    assert_eq!(first, second);
    assert!(!first.is_empty());
}

#[test]
fn test_missing_detail_files_excluded() {
    let dir = typical_tree();
    // Directory listed but comm already gone
    fs::create_dir(dir.path().join("1234")).unwrap();
    fs::write(dir.path().join("1234").join("cmdline"), b"com.gone.app\0").unwrap();

    let lister = ProcfsProcessLister::new(RealProcFs::new(dir.path()), OWN_ID);
    let records = lister.list();

    assert_eq!(records.len(), 3);
    assert!(records.iter().all(|r| r.process_name() != "com.gone.app"));
}

/// Fake procfs whose listed processes exit before their files are read.
struct VanishingFs {
    inner: RealProcFs,
    vanished: Vec<&'static str>,
    reads: Cell<usize>,
}

impl ProcFs for VanishingFs {
    fn entries(&self) -> io::Result<Vec<String>> {
        let mut entries = self.inner.entries()?;
        entries.extend(self.vanished.iter().map(|s| s.to_string()));
        Ok(entries)
    }

    fn read(&self, entry: &str, file: &str) -> io::Result<Vec<u8>> {
        self.reads.set(self.reads.get() + 1);
        if self.vanished.iter().any(|v| *v == entry) {
            return Err(io::Error::new(io::ErrorKind::NotFound, "process exited"));
        }
        self.inner.read(entry, file)
    }
}

#[test]
fn test_race_with_exiting_processes() {
    let dir = tempfile::tempdir().unwrap();
    add_process(dir.path(), "900", "example.app\n", b"com.example.app\0");

    let procfs = VanishingFs {
        inner: RealProcFs::new(dir.path()),
        vanished: vec!["777", "778"],
        reads: Cell::new(0),
    };
    let lister = ProcfsProcessLister::new(&procfs, OWN_ID);

    let records = lister.list();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].process_name(), "com.example.app");
    // Each vanished entry was attempted, not filtered before reading
    assert!(procfs.reads.get() >= 4);
}

#[test]
fn test_unreadable_root_yields_empty_list() {
    let dir = tempfile::tempdir().unwrap();
    let lister = ProcfsProcessLister::new(RealProcFs::new(dir.path().join("absent")), OWN_ID);
    assert!(lister.list().is_empty());
}

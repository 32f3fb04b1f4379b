//! Process record type returned by both enumeration paths.

use serde::Serialize;
use thiserror::Error;

/// Rejected attempt to build a [`ProcessRecord`] with an empty field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("process name is empty")]
    EmptyProcessName,

    #[error("app name is empty")]
    EmptyAppName,
}

/// One discovered process, identified by its OS-level name and a
/// human-readable label.
///
/// Both fields are guaranteed non-empty. Records compare by value and carry
/// no other identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ProcessRecord {
    process_name: String,
    app_name: String,
}

impl ProcessRecord {
    pub fn new(
        process_name: impl Into<String>,
        app_name: impl Into<String>,
    ) -> Result<Self, RecordError> {
        let process_name = process_name.into();
        let app_name = app_name.into();

        if process_name.is_empty() {
            return Err(RecordError::EmptyProcessName);
        }
        if app_name.is_empty() {
            return Err(RecordError::EmptyAppName);
        }

        Ok(Self {
            process_name,
            app_name,
        })
    }

    /// Technical name (privileged path) or stripped command line (procfs path).
    pub fn process_name(&self) -> &str {
        &self.process_name
    }

    /// Application label (privileged path) or `comm` value (procfs path).
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Label shown to users: `app_name`, followed by the sub-process tag in
    /// parentheses when `process_name` is of the form `name:tag`.
    pub fn display_name(&self) -> String {
        match self.process_name.split_once(':') {
            Some((_, tag)) => format!("{} ({})", self.app_name, tag),
            None => self.app_name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_with_subprocess_tag() {
        let record = ProcessRecord::new("com.example.app:worker", "Example").unwrap();
        assert_eq!(record.display_name(), "Example (worker)");
    }

    #[test]
    fn test_display_name_without_colon() {
        let record = ProcessRecord::new("com.example.app", "Example").unwrap();
        assert_eq!(record.display_name(), "Example");
    }

    #[test]
    fn test_display_name_uses_text_after_first_colon() {
        let record = ProcessRecord::new("com.example.app:remote:x", "Example").unwrap();
        assert_eq!(record.display_name(), "Example (remote:x)");
    }

    #[test]
    fn test_empty_fields_rejected() {
        assert_eq!(
            ProcessRecord::new("", "Example"),
            Err(RecordError::EmptyProcessName)
        );
        assert_eq!(
            ProcessRecord::new("com.example.app", ""),
            Err(RecordError::EmptyAppName)
        );
    }

    #[test]
    fn test_records_compare_by_value() {
        let a = ProcessRecord::new("com.example.app", "Example").unwrap();
        let b = ProcessRecord::new("com.example.app", "Example").unwrap();
        assert_eq!(a, b);
    }
}

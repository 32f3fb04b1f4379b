//! Error types shared by the listers and package resolvers.

use std::io;

use thiserror::Error;

use crate::process::RecordError;

/// Package metadata lookup failure.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("package not found: {0}")]
    NotFound(String),

    #[error("package catalog unavailable: {0}")]
    Unavailable(String),
}

/// Why a single process entry was left out of an enumeration.
///
/// None of these abort a scan; they are logged and the entry is dropped.
#[derive(Debug, Error)]
pub enum SkipReason {
    #[error("detail file unreadable: {0}")]
    Unreadable(#[from] io::Error),

    #[error("metadata resolution failed: {0}")]
    Unresolved(#[from] ResolveError),

    #[error("package {0} is marked invalid")]
    InvalidPackage(String),

    #[error("own process")]
    OwnProcess,

    #[error("shell process")]
    Shell,

    #[error("incomplete record: {0}")]
    Incomplete(#[from] RecordError),
}

/// Failure to load a package catalog file.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse catalog {path}: {message}")]
    Parse { path: String, message: String },
}

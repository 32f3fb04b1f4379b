//! Package metadata catalogs implementing [`PackageResolver`].
//!
//! Two sources are supported: a catalog file listing packages with their
//! labels (YAML, JSON or TOML), and an Android-style `packages.list`. Both
//! resolve `package:tag` process names to the owning package.

use std::fs;
use std::path::Path;

use ahash::AHashMap as HashMap;
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{CatalogError, ResolveError};
use crate::process::{PackageInfo, PackageResolver};

pub const DEFAULT_PACKAGES_LIST: &str = "/data/system/packages.list";

/// Strips a `:tag` sub-process suffix.
fn package_part(process_name: &str) -> &str {
    process_name
        .split_once(':')
        .map(|(pkg, _)| pkg)
        .unwrap_or(process_name)
}

/// Looks up `name`, then its package part.
fn lookup<'a>(
    packages: &'a HashMap<String, PackageInfo>,
    name: &str,
) -> Result<&'a PackageInfo, ResolveError> {
    packages
        .get(name)
        .or_else(|| packages.get(package_part(name)))
        .ok_or_else(|| ResolveError::NotFound(name.to_string()))
}

/// Catalog file entry.
#[derive(Debug, Deserialize)]
struct CatalogEntry {
    name: String,
    label: String,
    #[serde(default = "default_valid")]
    valid: bool,
}

fn default_valid() -> bool {
    true
}

/// Root structure of a catalog file.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    packages: Vec<CatalogEntry>,
}

/// Packages loaded from a catalog file.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    packages: HashMap<String, PackageInfo>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, info: PackageInfo) {
        self.packages.insert(info.package_name.clone(), info);
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Loads a catalog, picking the format from the file extension
    /// (`json`, `toml`, anything else is YAML).
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let parse_err = |message: String| CatalogError::Parse {
            path: path.display().to_string(),
            message,
        };

        let parsed: CatalogFile = match path.extension().and_then(|s| s.to_str()) {
            Some("json") => serde_json::from_str(&content).map_err(|e| parse_err(e.to_string()))?,
            Some("toml") => toml::from_str(&content).map_err(|e| parse_err(e.to_string()))?,
            _ => serde_yaml::from_str(&content).map_err(|e| parse_err(e.to_string()))?,
        };

        let mut catalog = Self::new();
        for entry in parsed.packages {
            catalog.insert(PackageInfo {
                package_name: entry.name,
                label: entry.label,
                is_valid: entry.valid,
            });
        }

        info!(
            "Loaded {} packages from catalog {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }
}

impl PackageResolver for StaticCatalog {
    fn resolve(&self, name: &str) -> Result<PackageInfo, ResolveError> {
        lookup(&self.packages, name).cloned()
    }
}

/// Packages read from an Android-style `packages.list`.
///
/// Each line is `<package> <uid> <debuggable> <data dir> ...`. The label is
/// the package name; a package is valid when its data dir is present.
#[derive(Debug, Clone, Default)]
pub struct PackagesListCatalog {
    packages: HashMap<String, PackageInfo>,
}

impl PackagesListCatalog {
    pub fn parse(content: &str) -> Self {
        let mut packages = HashMap::new();

        for line in content.lines() {
            let mut fields = line.split_whitespace();
            let name = match fields.next() {
                Some(n) => n,
                None => continue,
            };
            let data_dir = fields.nth(2).unwrap_or("");

            packages.insert(
                name.to_string(),
                PackageInfo {
                    package_name: name.to_string(),
                    label: name.to_string(),
                    is_valid: !data_dir.is_empty(),
                },
            );
        }

        debug!("Parsed {} entries from packages.list", packages.len());
        Self { packages }
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Self::parse(&content))
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

impl PackageResolver for PackagesListCatalog {
    fn resolve(&self, name: &str) -> Result<PackageInfo, ResolveError> {
        lookup(&self.packages, name).cloned()
    }
}

/// Tries each resolver in order; the first success wins.
#[derive(Default)]
pub struct ChainedResolver {
    resolvers: Vec<Box<dyn PackageResolver>>,
}

impl ChainedResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, resolver: impl PackageResolver + 'static) {
        self.resolvers.push(Box::new(resolver));
    }

    pub fn len(&self) -> usize {
        self.resolvers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolvers.is_empty()
    }
}

impl PackageResolver for ChainedResolver {
    fn resolve(&self, name: &str) -> Result<PackageInfo, ResolveError> {
        if self.resolvers.is_empty() {
            return Err(ResolveError::Unavailable(
                "no package catalog configured".to_string(),
            ));
        }

        let mut last = None;
        for resolver in &self.resolvers {
            match resolver.resolve(name) {
                Ok(info) => return Ok(info),
                Err(e) => last = Some(e),
            }
        }
        Err(last.unwrap_or_else(|| ResolveError::NotFound(name.to_string())))
    }
}

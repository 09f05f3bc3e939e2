use crate::dependency_resolution::domain::{PackageName, PackageRecord, RepositoryDescriptor};
use crate::shared::error::DepVizError;
use crate::shared::Result;
use serde::Deserialize;
use std::collections::BTreeMap;

/// One package entry of the JSON repository format
///
/// Every field is optional; a missing or null `depends` means no dependencies.
#[derive(Debug, Default, Deserialize)]
struct RawPackage {
    #[serde(default)]
    depends: Option<Vec<String>>,
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

/// Parses a JSON repository descriptor
///
/// The document must be an object mapping package names to package objects:
///
/// ```json
/// { "app": { "depends": ["lib"], "version": "1.0.0" }, "lib": {} }
/// ```
///
/// # Arguments
/// * `content` - Raw JSON text
/// * `origin` - Where the text came from (path or URL), used in error messages
///
/// # Errors
/// Returns [`DepVizError::RepositoryParseError`] for invalid JSON or a
/// non-object document. Entries with invalid names are skipped and listed in
/// [`RepositoryDescriptor::skipped_entries`].
pub fn parse_repository_json(content: &str, origin: &str) -> Result<RepositoryDescriptor> {
    let parse_error = |details: String| DepVizError::RepositoryParseError {
        origin: origin.to_string(),
        details,
    };

    let raw: BTreeMap<String, Option<RawPackage>> =
        serde_json::from_str(content).map_err(|e| parse_error(e.to_string()))?;

    let mut skipped = Vec::new();
    let records: Vec<PackageRecord> = raw
        .into_iter()
        .filter_map(|(name, package)| to_record(name, package.unwrap_or_default(), &mut skipped))
        .collect();

    let repository =
        RepositoryDescriptor::new(records).map_err(|e| parse_error(e.to_string()))?;
    Ok(repository.with_skipped_entries(skipped))
}

/// Converts one raw entry, dropping invalid names into `skipped`
///
/// An invalid package name drops the whole entry; an invalid dependency name
/// drops only that dependency.
fn to_record(
    name: String,
    package: RawPackage,
    skipped: &mut Vec<String>,
) -> Option<PackageRecord> {
    let name = match PackageName::new(name.clone()) {
        Ok(name) => name,
        Err(e) => {
            skipped.push(format!("package '{}': {}", name.escape_debug(), e));
            return None;
        }
    };

    let mut depends = Vec::new();
    for dep in package.depends.unwrap_or_default() {
        match PackageName::new(dep.clone()) {
            Ok(dep) => depends.push(dep),
            Err(e) => skipped.push(format!(
                "dependency '{}' of '{}': {}",
                dep.escape_debug(),
                name,
                e
            )),
        }
    }

    let mut record = PackageRecord::new(name, depends);
    if let Some(version) = package.version {
        record = record.with_version(version);
    }
    if let Some(description) = package.description {
        record = record.with_description(description);
    }
    Some(record)
}

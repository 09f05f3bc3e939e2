use super::{PackageName, PackageRecord};
use crate::shared::Result;
use std::collections::BTreeMap;

/// RepositoryDescriptor aggregate: package name -> package record
///
/// Built once from an external source and read-only afterwards. Iteration
/// follows lexicographic package-name order, so everything derived from a
/// descriptor is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositoryDescriptor {
    records: BTreeMap<PackageName, PackageRecord>,
    /// Source entries dropped while loading, as human-readable notes
    skipped: Vec<String>,
}

impl RepositoryDescriptor {
    /// Creates a descriptor from package records
    ///
    /// # Errors
    /// Returns an error if two records share the same package name
    pub fn new(records: Vec<PackageRecord>) -> Result<Self> {
        let mut map = BTreeMap::new();
        for record in records {
            let name = record.name().clone();
            if map.insert(name.clone(), record).is_some() {
                anyhow::bail!("Duplicate package '{}' in repository descriptor", name);
            }
        }
        Ok(Self {
            records: map,
            skipped: Vec::new(),
        })
    }

    /// Convenience constructor from `(package, [dependencies])` pairs
    ///
    /// # Examples
    /// ```
    /// use depviz::dependency_resolution::domain::RepositoryDescriptor;
    ///
    /// let repo = RepositoryDescriptor::from_adjacency(&[("A", &["B"]), ("B", &[])]).unwrap();
    /// assert_eq!(repo.len(), 2);
    /// ```
    pub fn from_adjacency(entries: &[(&str, &[&str])]) -> Result<Self> {
        let records = entries
            .iter()
            .map(|(name, depends)| {
                let depends = depends
                    .iter()
                    .map(|dep| PackageName::new(dep.to_string()))
                    .collect::<Result<Vec<_>>>()?;
                Ok(PackageRecord::new(PackageName::new(name.to_string())?, depends))
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(records)
    }

    /// Attaches notes about source entries that could not be loaded
    pub fn with_skipped_entries(mut self, skipped: Vec<String>) -> Self {
        self.skipped = skipped;
        self
    }

    pub fn skipped_entries(&self) -> &[String] {
        &self.skipped
    }

    pub fn get(&self, name: &PackageName) -> Option<&PackageRecord> {
        self.records.get(name)
    }

    pub fn contains(&self, name: &PackageName) -> bool {
        self.records.contains_key(name)
    }

    /// Direct dependencies of a package; unknown packages have none
    pub fn depends_of(&self, name: &PackageName) -> &[PackageName] {
        self.records
            .get(name)
            .map(PackageRecord::depends)
            .unwrap_or(&[])
    }

    pub fn records(&self) -> impl Iterator<Item = &PackageRecord> {
        self.records.values()
    }

    pub fn package_names(&self) -> impl Iterator<Item = &PackageName> {
        self.records.keys()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

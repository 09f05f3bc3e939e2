use super::PackageName;
use std::collections::{BTreeMap, BTreeSet};

/// ForwardGraph aggregate: the subgraph reachable from a start package
///
/// Each key is a package visited during traversal; its value is the package's
/// depends-list exactly as recorded in the repository descriptor. The start
/// package is always a key, even when the descriptor does not know it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForwardGraph {
    start: PackageName,
    adjacency: BTreeMap<PackageName, Vec<PackageName>>,
}

impl ForwardGraph {
    pub fn new(start: PackageName, mut adjacency: BTreeMap<PackageName, Vec<PackageName>>) -> Self {
        adjacency.entry(start.clone()).or_default();
        Self { start, adjacency }
    }

    pub fn start(&self) -> &PackageName {
        &self.start
    }

    /// Direct dependencies of a package in traversal order; unknown packages have none
    pub fn dependencies_of(&self, name: &PackageName) -> &[PackageName] {
        self.adjacency.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, name: &PackageName) -> bool {
        self.adjacency.contains_key(name)
    }

    /// Visited packages in lexicographic order
    pub fn packages(&self) -> impl Iterator<Item = &PackageName> {
        self.adjacency.keys()
    }

    /// `(package, dependencies)` pairs in lexicographic package order
    pub fn entries(&self) -> impl Iterator<Item = (&PackageName, &[PackageName])> {
        self.adjacency
            .iter()
            .map(|(name, deps)| (name, deps.as_slice()))
    }

    pub fn package_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Union of all dependency lists, excluding the start package
    pub fn unique_dependencies(&self) -> BTreeSet<&PackageName> {
        self.adjacency
            .values()
            .flatten()
            .filter(|dep| **dep != self.start)
            .collect()
    }

    pub fn unique_dependency_count(&self) -> usize {
        self.unique_dependencies().len()
    }
}

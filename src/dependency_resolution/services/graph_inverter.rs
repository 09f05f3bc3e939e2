use crate::dependency_resolution::domain::{PackageName, RepositoryDescriptor, ReverseGraph};
use std::collections::BTreeMap;

/// GraphInverter service deriving the dependent-of graph from a whole descriptor
pub struct GraphInverter;

impl GraphInverter {
    /// Flips every `package -> dependency` edge of the descriptor
    ///
    /// Every descriptor key and every referenced dependency name becomes a key
    /// of the reverse graph; packages nobody depends on map to an empty list.
    pub fn invert(repo: &RepositoryDescriptor) -> ReverseGraph {
        let mut dependents: BTreeMap<PackageName, Vec<PackageName>> = BTreeMap::new();

        for record in repo.records() {
            for dependency in record.depends() {
                dependents
                    .entry(dependency.clone())
                    .or_default()
                    .push(record.name().clone());
            }
        }

        for name in repo.package_names() {
            dependents.entry(name.clone()).or_default();
        }

        ReverseGraph::new(dependents)
    }
}

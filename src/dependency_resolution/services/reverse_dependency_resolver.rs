use crate::dependency_resolution::domain::{PackageName, ReverseDependencySet, ReverseGraph};
use std::collections::{BTreeSet, HashSet, VecDeque};

/// ReverseDependencyResolver service finding every transitive consumer of a package
pub struct ReverseDependencyResolver;

impl ReverseDependencyResolver {
    /// Breadth-first walk over the reverse graph starting at `start`
    ///
    /// The start package is never part of the result, even when a cycle leads
    /// back to it.
    pub fn resolve(start: &PackageName, reverse: &ReverseGraph) -> ReverseDependencySet {
        let mut visited: HashSet<&PackageName> = HashSet::from([start]);
        let mut queue: VecDeque<&PackageName> = VecDeque::from([start]);

        while let Some(current) = queue.pop_front() {
            for dependent in reverse.dependents_of(current) {
                if visited.insert(dependent) {
                    queue.push_back(dependent);
                }
            }
        }

        let consumers: BTreeSet<PackageName> = visited
            .into_iter()
            .filter(|name| *name != start)
            .cloned()
            .collect();

        ReverseDependencySet::new(start.clone(), consumers)
    }
}

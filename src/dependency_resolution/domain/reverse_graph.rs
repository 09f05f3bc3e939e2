use super::PackageName;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// ReverseGraph aggregate: package name -> packages that directly depend on it
///
/// Covers the whole repository descriptor, not just a reachable subgraph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReverseGraph {
    dependents: BTreeMap<PackageName, Vec<PackageName>>,
}

impl ReverseGraph {
    pub fn new(dependents: BTreeMap<PackageName, Vec<PackageName>>) -> Self {
        Self { dependents }
    }

    /// Direct dependents of a package; unknown packages have none
    pub fn dependents_of(&self, name: &PackageName) -> &[PackageName] {
        self.dependents
            .get(name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn contains(&self, name: &PackageName) -> bool {
        self.dependents.contains_key(name)
    }

    pub fn packages(&self) -> impl Iterator<Item = &PackageName> {
        self.dependents.keys()
    }

    pub fn len(&self) -> usize {
        self.dependents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dependents.is_empty()
    }
}

/// ReverseDependencySet: transitive consumers of a package, excluding the package itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReverseDependencySet {
    package: PackageName,
    consumers: BTreeSet<PackageName>,
}

impl ReverseDependencySet {
    pub fn new(package: PackageName, mut consumers: BTreeSet<PackageName>) -> Self {
        consumers.remove(&package);
        Self {
            package,
            consumers,
        }
    }

    /// The package whose consumers were resolved
    pub fn package(&self) -> &PackageName {
        &self.package
    }

    /// Consumers in lexicographic order
    pub fn iter(&self) -> impl Iterator<Item = &PackageName> {
        self.consumers.iter()
    }

    pub fn contains(&self, name: &PackageName) -> bool {
        self.consumers.contains(name)
    }

    pub fn len(&self) -> usize {
        self.consumers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.consumers.is_empty()
    }
}

impl fmt::Display for ReverseDependencySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.consumers.iter().map(PackageName::as_str).collect();
        write!(f, "{}", names.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> PackageName {
        PackageName::new(s.to_string()).unwrap()
    }

    #[test]
    fn test_dependents_of_unknown_is_empty() {
        let graph = ReverseGraph::default();
        assert!(graph.dependents_of(&name("A")).is_empty());
        assert!(graph.is_empty());
    }

    #[test]
    fn test_dependents_lookup() {
        let mut map = BTreeMap::new();
        map.insert(name("D"), vec![name("B"), name("C")]);
        map.insert(name("A"), vec![]);
        let graph = ReverseGraph::new(map);

        assert_eq!(graph.dependents_of(&name("D")), &[name("B"), name("C")]);
        assert!(graph.contains(&name("A")));
        assert_eq!(graph.len(), 2);
    }

    #[test]
    fn test_reverse_set_excludes_package_itself() {
        let consumers: BTreeSet<PackageName> = [name("X"), name("Y")].into_iter().collect();
        let set = ReverseDependencySet::new(name("X"), consumers);

        assert!(!set.contains(&name("X")));
        assert_eq!(set.len(), 1);
        assert_eq!(set.package(), &name("X"));
    }

    #[test]
    fn test_reverse_set_display_sorted() {
        let consumers: BTreeSet<PackageName> =
            [name("C"), name("A"), name("B")].into_iter().collect();
        let set = ReverseDependencySet::new(name("D"), consumers);
        assert_eq!(set.to_string(), "A, B, C");
    }
}

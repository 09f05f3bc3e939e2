use crate::dependency_resolution::domain::{
    CycleEdge, ForwardGraph, PackageName, RepositoryDescriptor,
};
use petgraph::algo::kosaraju_scc;
use petgraph::graphmap::DiGraphMap;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

/// Result of a forward traversal: the reachable graph and the cycle edges found on the way
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForwardResolution {
    pub graph: ForwardGraph,
    pub cycles: BTreeSet<CycleEdge>,
}

impl ForwardResolution {
    pub fn has_cycles(&self) -> bool {
        !self.cycles.is_empty()
    }
}

/// ForwardGraphBuilder service for transitive dependency discovery
///
/// Breadth-first traversal with an explicit queue and visited set, so every
/// package is expanded at most once and cyclic descriptors always terminate.
/// Pure logic with no I/O.
pub struct ForwardGraphBuilder;

impl ForwardGraphBuilder {
    /// Builds the forward graph reachable from `start`
    ///
    /// Unknown packages (including an unknown `start`) are recorded with an
    /// empty dependency list and never expanded.
    ///
    /// An edge into an already-visited package is reported as a cycle edge when
    /// it closes a cycle, i.e. its target can reach its source. Edges that only
    /// re-join shared dependencies are not cycles. The whole build runs in time
    /// linear in packages plus edges.
    pub fn build(start: &PackageName, repo: &RepositoryDescriptor) -> ForwardResolution {
        let mut adjacency: BTreeMap<PackageName, Vec<PackageName>> = BTreeMap::new();
        let mut visited: HashSet<&PackageName> = HashSet::from([start]);
        let mut queue: VecDeque<&PackageName> = VecDeque::from([start]);
        let mut revisits: Vec<(&PackageName, &PackageName)> = Vec::new();

        while let Some(current) = queue.pop_front() {
            let Some(record) = repo.get(current) else {
                adjacency.insert(current.clone(), Vec::new());
                continue;
            };

            adjacency.insert(current.clone(), record.depends().to_vec());

            for dependency in record.depends() {
                if visited.contains(dependency) {
                    revisits.push((current, dependency));
                } else {
                    visited.insert(dependency);
                    queue.push_back(dependency);
                }
            }
        }

        let graph = ForwardGraph::new(start.clone(), adjacency);
        let cycles = Self::confirm_cycles(&graph, &revisits);

        ForwardResolution { graph, cycles }
    }

    /// Keeps the revisit edges whose target reaches back to their source
    ///
    /// `v` reaches `u` exactly when both lie in the same strongly connected
    /// component, so one SCC pass over the graph decides every revisit.
    fn confirm_cycles(
        graph: &ForwardGraph,
        revisits: &[(&PackageName, &PackageName)],
    ) -> BTreeSet<CycleEdge> {
        if revisits.is_empty() {
            return BTreeSet::new();
        }

        let components = Self::component_index(graph);

        revisits
            .iter()
            .filter(|&&(from, to)| {
                from == to
                    || matches!(
                        (components.get(from), components.get(to)),
                        (Some(a), Some(b)) if a == b
                    )
            })
            .map(|&(from, to)| CycleEdge::new(from.clone(), to.clone()))
            .collect()
    }

    /// Maps every package of the graph to the id of its strongly connected component
    fn component_index(graph: &ForwardGraph) -> HashMap<&PackageName, usize> {
        let mut digraph: DiGraphMap<&PackageName, ()> = DiGraphMap::new();
        for (package, dependencies) in graph.entries() {
            digraph.add_node(package);
            for dependency in dependencies {
                digraph.add_edge(package, dependency, ());
            }
        }

        kosaraju_scc(&digraph)
            .into_iter()
            .enumerate()
            .flat_map(|(id, component)| component.into_iter().map(move |package| (package, id)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependency_resolution::domain::PackageRecord;

    fn name(s: &str) -> PackageName {
        PackageName::new(s.to_string()).unwrap()
    }

    fn deps<'a>(graph: &'a ForwardGraph, package: &str) -> Vec<&'a str> {
        graph
            .dependencies_of(&name(package))
            .iter()
            .map(PackageName::as_str)
            .collect()
    }

    #[test]
    fn test_build_diamond_graph() {
        let repo = RepositoryDescriptor::from_adjacency(&[
            ("A", &["B", "C"]),
            ("B", &["D"]),
            ("C", &["D"]),
            ("D", &[]),
        ])
        .unwrap();

        let resolution = ForwardGraphBuilder::build(&name("A"), &repo);
        let graph = &resolution.graph;

        assert_eq!(graph.package_count(), 4);
        assert_eq!(deps(graph, "A"), vec!["B", "C"]);
        assert_eq!(deps(graph, "B"), vec!["D"]);
        assert_eq!(deps(graph, "C"), vec!["D"]);
        assert!(deps(graph, "D").is_empty());
        assert!(resolution.cycles.is_empty());
        assert!(!resolution.has_cycles());
    }

    #[test]
    fn test_build_two_node_cycle_reported_once() {
        let repo = RepositoryDescriptor::from_adjacency(&[("X", &["Y"]), ("Y", &["X"])]).unwrap();

        let resolution = ForwardGraphBuilder::build(&name("X"), &repo);

        assert_eq!(deps(&resolution.graph, "X"), vec!["Y"]);
        assert_eq!(deps(&resolution.graph, "Y"), vec!["X"]);
        assert_eq!(resolution.cycles.len(), 1);
        assert!(resolution
            .cycles
            .contains(&CycleEdge::new(name("Y"), name("X"))));
    }

    #[test]
    fn test_build_self_dependency_is_cycle() {
        let repo = RepositoryDescriptor::from_adjacency(&[("A", &["A", "B"]), ("B", &[])]).unwrap();

        let resolution = ForwardGraphBuilder::build(&name("A"), &repo);

        assert_eq!(resolution.cycles.len(), 1);
        assert!(resolution.cycles.iter().next().unwrap().is_self_loop());
    }

    #[test]
    fn test_build_long_cycle_reports_closing_edge() {
        let repo = RepositoryDescriptor::from_adjacency(&[
            ("A", &["B"]),
            ("B", &["C"]),
            ("C", &["A"]),
        ])
        .unwrap();

        let resolution = ForwardGraphBuilder::build(&name("A"), &repo);

        let cycles: Vec<String> = resolution.cycles.iter().map(|c| c.to_string()).collect();
        assert_eq!(cycles, vec!["A <-> C"]);
    }

    #[test]
    fn test_build_cycle_not_involving_start() {
        let repo = RepositoryDescriptor::from_adjacency(&[
            ("app", &["lib"]),
            ("lib", &["util"]),
            ("util", &["lib"]),
        ])
        .unwrap();

        let resolution = ForwardGraphBuilder::build(&name("app"), &repo);

        let cycles: Vec<String> = resolution.cycles.iter().map(|c| c.to_string()).collect();
        assert_eq!(cycles, vec!["lib <-> util"]);
    }

    #[test]
    fn test_build_cycle_through_cross_edge() {
        // D -> B closes B -> C -> D -> B even though B and D sit on different BFS branches
        let repo = RepositoryDescriptor::from_adjacency(&[
            ("A", &["B", "D"]),
            ("B", &["C"]),
            ("C", &["D"]),
            ("D", &["B"]),
        ])
        .unwrap();

        let resolution = ForwardGraphBuilder::build(&name("A"), &repo);

        let cycles: Vec<String> = resolution.cycles.iter().map(|c| c.to_string()).collect();
        assert_eq!(cycles, vec!["B <-> D", "C <-> D"]);
    }

    #[test]
    fn test_build_unknown_start() {
        let repo = RepositoryDescriptor::from_adjacency(&[("A", &["B"])]).unwrap();

        let resolution = ForwardGraphBuilder::build(&name("ghost"), &repo);

        assert_eq!(resolution.graph.package_count(), 1);
        assert!(resolution.graph.contains(&name("ghost")));
        assert!(deps(&resolution.graph, "ghost").is_empty());
        assert!(resolution.cycles.is_empty());
    }

    #[test]
    fn test_build_empty_descriptor() {
        let repo = RepositoryDescriptor::default();

        let resolution = ForwardGraphBuilder::build(&name("A"), &repo);

        assert_eq!(resolution.graph.package_count(), 1);
        assert!(resolution.cycles.is_empty());
    }

    #[test]
    fn test_build_dangling_dependency_is_leaf() {
        let repo = RepositoryDescriptor::from_adjacency(&[("A", &["missing", "B"]), ("B", &[])])
            .unwrap();

        let resolution = ForwardGraphBuilder::build(&name("A"), &repo);

        assert_eq!(deps(&resolution.graph, "A"), vec!["missing", "B"]);
        assert!(resolution.graph.contains(&name("missing")));
        assert!(deps(&resolution.graph, "missing").is_empty());
        assert!(resolution.cycles.is_empty());
    }

    #[test]
    fn test_build_ignores_unreachable_packages() {
        let repo = RepositoryDescriptor::from_adjacency(&[
            ("A", &["B"]),
            ("B", &[]),
            ("island", &["A"]),
        ])
        .unwrap();

        let resolution = ForwardGraphBuilder::build(&name("A"), &repo);

        assert!(!resolution.graph.contains(&name("island")));
        assert_eq!(resolution.graph.package_count(), 2);
    }

    #[test]
    fn test_build_preserves_duplicate_dependency_entries() {
        let repo = RepositoryDescriptor::from_adjacency(&[("A", &["B", "B"]), ("B", &[])]).unwrap();

        let resolution = ForwardGraphBuilder::build(&name("A"), &repo);

        assert_eq!(deps(&resolution.graph, "A"), vec!["B", "B"]);
        assert_eq!(resolution.graph.package_count(), 2);
        assert!(resolution.cycles.is_empty());
    }

    #[test]
    fn test_build_terminates_on_dense_cycles() {
        let repo = RepositoryDescriptor::from_adjacency(&[
            ("a", &["b", "c", "a"]),
            ("b", &["a", "c"]),
            ("c", &["a", "b"]),
        ])
        .unwrap();

        let resolution = ForwardGraphBuilder::build(&name("a"), &repo);

        assert_eq!(resolution.graph.package_count(), 3);
        let cycles: Vec<String> = resolution.cycles.iter().map(|c| c.to_string()).collect();
        assert_eq!(cycles, vec!["a <-> a", "a <-> b", "a <-> c", "b <-> c"]);
    }

    fn chain_with_back_edges(size: usize) -> RepositoryDescriptor {
        let names: Vec<String> = (0..size).map(|i| format!("p{}", i)).collect();
        let records = (0..size)
            .map(|i| {
                let mut depends = Vec::new();
                if i + 1 < size {
                    depends.push(name(&names[i + 1]));
                }
                if i > 0 {
                    depends.push(name(&names[i - 1]));
                }
                PackageRecord::new(name(&names[i]), depends)
            })
            .collect();
        RepositoryDescriptor::new(records).unwrap()
    }

    #[test]
    fn test_build_large_chain_with_back_edges() {
        let repo = chain_with_back_edges(20_000);

        let resolution = ForwardGraphBuilder::build(&name("p0"), &repo);

        assert_eq!(resolution.graph.package_count(), 20_000);
        assert_eq!(resolution.cycles.len(), 19_999);
        assert!(resolution
            .cycles
            .contains(&CycleEdge::new(name("p19998"), name("p19999"))));
    }

    #[test]
    fn test_build_large_ring() {
        let size = 5_000;
        let records = (0..size)
            .map(|i| {
                PackageRecord::new(
                    name(&format!("r{}", i)),
                    vec![name(&format!("r{}", (i + 1) % size))],
                )
            })
            .collect();
        let repo = RepositoryDescriptor::new(records).unwrap();

        let resolution = ForwardGraphBuilder::build(&name("r0"), &repo);

        let cycles: Vec<String> = resolution.cycles.iter().map(|c| c.to_string()).collect();
        assert_eq!(cycles, vec!["r0 <-> r4999"]);
    }

    #[test]
    fn test_build_separate_components_do_not_mix() {
        // e -> d re-enters a visited package but d cannot reach e
        let repo = RepositoryDescriptor::from_adjacency(&[
            ("a", &["b", "c", "e"]),
            ("b", &["a"]),
            ("c", &["d"]),
            ("d", &["c"]),
            ("e", &["d"]),
        ])
        .unwrap();

        let resolution = ForwardGraphBuilder::build(&name("a"), &repo);

        let cycles: Vec<String> = resolution.cycles.iter().map(|c| c.to_string()).collect();
        assert_eq!(cycles, vec!["a <-> b", "c <-> d"]);
    }
}

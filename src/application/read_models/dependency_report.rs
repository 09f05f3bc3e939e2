use crate::application::dto::ResolveResponse;
use crate::dependency_resolution::domain::{CycleEdge, ForwardGraph, ReverseDependencySet};
use std::collections::BTreeSet;

/// DependencyReport read model consumed by every [`GraphFormatter`]
///
/// Optional sections are `None` when the user did not ask for them.
///
/// [`GraphFormatter`]: crate::ports::outbound::GraphFormatter
#[derive(Debug, Clone)]
pub struct DependencyReport {
    pub graph: ForwardGraph,
    pub cycles: Option<BTreeSet<CycleEdge>>,
    pub reverse_dependencies: Option<ReverseDependencySet>,
}

impl DependencyReport {
    pub fn new(graph: ForwardGraph) -> Self {
        Self {
            graph,
            cycles: None,
            reverse_dependencies: None,
        }
    }

    pub fn with_cycles(mut self, cycles: BTreeSet<CycleEdge>) -> Self {
        self.cycles = Some(cycles);
        self
    }

    pub fn with_reverse_dependencies(mut self, reverse: ReverseDependencySet) -> Self {
        self.reverse_dependencies = Some(reverse);
        self
    }

    /// Builds the report from a use case response
    pub fn from_response(response: ResolveResponse, show_cycles: bool) -> Self {
        let mut report = Self::new(response.resolution.graph);
        if show_cycles {
            report = report.with_cycles(response.resolution.cycles);
        }
        if let Some(reverse) = response.reverse_dependencies {
            report = report.with_reverse_dependencies(reverse);
        }
        report
    }
}

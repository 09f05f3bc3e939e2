use super::report_sections::render_optional_sections;
use crate::application::read_models::DependencyReport;
use crate::dependency_resolution::domain::{ForwardGraph, PackageName};
use crate::ports::outbound::GraphFormatter;
use crate::shared::Result;

/// ListFormatter adapter rendering the forward graph as a flat adjacency listing
///
/// Packages appear in lexicographic order; each package's dependencies keep
/// the order recorded in the graph. Packages without dependencies produce no
/// line but still count toward the unique dependency total.
pub struct ListFormatter;

impl ListFormatter {
    pub fn new() -> Self {
        Self
    }

    fn render_listing(graph: &ForwardGraph, output: &mut String) {
        let mut any_line = false;

        for (package, dependencies) in graph.entries() {
            if dependencies.is_empty() {
                continue;
            }
            let names: Vec<&str> = dependencies.iter().map(PackageName::as_str).collect();
            output.push_str(&format!("{} -> {}\n", package, names.join(", ")));
            any_line = true;
        }

        if !any_line {
            output.push_str(&format!("{} has no dependencies\n", graph.start()));
        }
    }
}

impl Default for ListFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphFormatter for ListFormatter {
    fn format(&self, report: &DependencyReport) -> Result<String> {
        let mut output = String::new();

        Self::render_listing(&report.graph, &mut output);
        output.push_str(&format!(
            "\nTotal unique dependencies: {}\n",
            report.graph.unique_dependency_count()
        ));

        render_optional_sections(report, &mut output);
        Ok(output)
    }
}

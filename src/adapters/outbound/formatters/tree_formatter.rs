use super::report_sections::render_optional_sections;
use crate::application::read_models::DependencyReport;
use crate::dependency_resolution::domain::{ForwardGraph, PackageName};
use crate::ports::outbound::GraphFormatter;
use crate::shared::Result;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const VERTICAL: &str = "│   ";
const SPACE: &str = "    ";

/// TreeFormatter adapter rendering the forward graph as an ASCII tree
///
/// Children are sorted alphabetically. A child that is already on the
/// current path is printed once with a `(cycle)` marker and not expanded,
/// so rendering terminates on any graph.
pub struct TreeFormatter;

impl TreeFormatter {
    pub fn new() -> Self {
        Self
    }

    fn render_children<'g>(
        graph: &'g ForwardGraph,
        node: &'g PackageName,
        prefix: &str,
        path: &mut Vec<&'g PackageName>,
        output: &mut String,
    ) {
        let mut children: Vec<&'g PackageName> = graph.dependencies_of(node).iter().collect();
        children.sort();

        for (idx, &child) in children.iter().enumerate() {
            let is_last = idx + 1 == children.len();
            output.push_str(prefix);
            output.push_str(if is_last { LAST_BRANCH } else { BRANCH });
            output.push_str(child.as_str());

            if path.contains(&child) {
                output.push_str(" (cycle)\n");
                continue;
            }
            output.push('\n');

            let next_prefix = format!("{}{}", prefix, if is_last { SPACE } else { VERTICAL });
            path.push(child);
            Self::render_children(graph, child, &next_prefix, path, output);
            path.pop();
        }
    }
}

impl Default for TreeFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphFormatter for TreeFormatter {
    fn format(&self, report: &DependencyReport) -> Result<String> {
        let graph = &report.graph;
        let root = graph.start();

        let mut output = format!("{}\n", root);
        let mut path = vec![root];
        Self::render_children(graph, root, "", &mut path, &mut output);

        render_optional_sections(report, &mut output);
        Ok(output)
    }
}

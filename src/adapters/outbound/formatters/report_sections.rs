use crate::application::read_models::DependencyReport;

/// Appends the optional reverse-dependency and cycle sections shared by all formatters
pub(super) fn render_optional_sections(report: &DependencyReport, output: &mut String) {
    if let Some(reverse) = &report.reverse_dependencies {
        output.push('\n');
        if reverse.is_empty() {
            output.push_str(&format!(
                "Reverse dependencies of {}: (none)\n",
                reverse.package()
            ));
        } else {
            output.push_str(&format!(
                "Reverse dependencies of {}: {}\n",
                reverse.package(),
                reverse
            ));
        }
    }

    if let Some(cycles) = &report.cycles {
        output.push('\n');
        if cycles.is_empty() {
            output.push_str("No cycles detected\n");
        } else {
            output.push_str("Cycles detected:\n");
            for edge in cycles {
                output.push_str(&format!("  {}\n", edge));
            }
        }
    }
}

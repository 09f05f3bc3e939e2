use crate::application::read_models::DependencyReport;
use crate::shared::Result;

/// GraphFormatter port for rendering a dependency report as text
///
/// Implementations are pure: the same report always yields the same text.
pub trait GraphFormatter {
    /// Formats the report
    ///
    /// # Errors
    /// Returns an error if rendering fails
    fn format(&self, report: &DependencyReport) -> Result<String>;
}

use crate::adapters::outbound::formatters::{ListFormatter, TreeFormatter};
use crate::application::dto::AsciiMode;
use crate::ports::outbound::GraphFormatter;

/// Factory for creating graph formatters
///
/// This factory encapsulates the creation logic for different formatter implementations,
/// following the Factory Pattern. It belongs in the application layer as it orchestrates
/// the selection of infrastructure adapters based on application needs.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified rendering mode
    ///
    /// # Examples
    /// ```
    /// use depviz::application::dto::AsciiMode;
    /// use depviz::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(AsciiMode::Tree);
    /// ```
    pub fn create(mode: AsciiMode) -> Box<dyn GraphFormatter> {
        match mode {
            AsciiMode::Tree => Box::new(TreeFormatter::new()),
            AsciiMode::List => Box::new(ListFormatter::new()),
        }
    }

    /// Returns the progress message for the specified rendering mode
    ///
    /// # Examples
    /// ```
    /// use depviz::application::dto::AsciiMode;
    /// use depviz::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(AsciiMode::List);
    /// assert_eq!(message, "📝 Rendering dependency list...");
    /// ```
    pub fn progress_message(mode: AsciiMode) -> &'static str {
        match mode {
            AsciiMode::Tree => "📝 Rendering ASCII dependency tree...",
            AsciiMode::List => "📝 Rendering dependency list...",
        }
    }
}

/// Formatter adapters rendering a dependency report as plain text
mod list_formatter;
mod report_sections;
mod tree_formatter;

pub use list_formatter::ListFormatter;
pub use tree_formatter::TreeFormatter;

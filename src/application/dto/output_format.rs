/// Rendering mode for the forward dependency graph
///
/// Shared by the CLI (inbound adapter), the config file and the formatter
/// factory, so it lives in the application layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AsciiMode {
    /// Nested ASCII tree, children sorted alphabetically
    Tree,
    /// Flat adjacency listing (default)
    #[default]
    List,
}

impl std::str::FromStr for AsciiMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tree" => Ok(AsciiMode::Tree),
            "list" => Ok(AsciiMode::List),
            _ => Err(format!(
                "Invalid ascii mode: {}. Please specify 'tree' or 'list'",
                s
            )),
        }
    }
}

impl std::fmt::Display for AsciiMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AsciiMode::Tree => write!(f, "tree"),
            AsciiMode::List => write!(f, "list"),
        }
    }
}

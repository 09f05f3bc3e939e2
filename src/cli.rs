use clap::Parser;
use std::path::PathBuf;

use crate::application::dto::AsciiMode;
use crate::ports::outbound::RepoMode;

/// Resolve and visualize the dependency graph of a package
#[derive(Parser, Debug)]
#[command(name = "depviz")]
#[command(version)]
#[command(
    about = "Resolve and visualize the dependency graph of a package",
    long_about = None
)]
pub struct Args {
    /// Name of the package whose dependency graph is resolved
    #[arg(short, long)]
    pub package: Option<String>,

    /// Repository descriptor location: a local JSON file or an http(s) URL
    #[arg(short, long = "repo-path", value_name = "PATH_OR_URL")]
    pub repo_path: Option<String>,

    /// How to read the repository: local or remote (inferred from the path when omitted)
    #[arg(short = 'm', long = "repo-mode")]
    pub repo_mode: Option<RepoMode>,

    /// Rendering style: tree or list [default: list]
    #[arg(short, long = "ascii-mode")]
    pub ascii_mode: Option<AsciiMode>,

    /// Also list every package that transitively depends on the package
    #[arg(long)]
    pub reverse: bool,

    /// Append the detected dependency cycles to the output
    #[arg(long = "show-cycles")]
    pub show_cycles: bool,

    /// Exit with status 1 when the forward graph contains a cycle
    #[arg(long = "fail-on-cycles")]
    pub fail_on_cycles: bool,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to a YAML config file (defaults to ./depviz.config.yml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Suppress progress output on stderr
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_args() {
        let args = Args::try_parse_from(["depviz", "-p", "A", "-r", "repo.json"]).unwrap();
        assert_eq!(args.package.as_deref(), Some("A"));
        assert_eq!(args.repo_path.as_deref(), Some("repo.json"));
        assert!(args.repo_mode.is_none());
        assert!(args.ascii_mode.is_none());
        assert!(!args.reverse);
        assert!(!args.show_cycles);
        assert!(!args.fail_on_cycles);
        assert!(!args.quiet);
    }

    #[test]
    fn test_parse_all_flags() {
        let args = Args::try_parse_from([
            "depviz",
            "--package",
            "web",
            "--repo-path",
            "https://example.com/repo.json",
            "--repo-mode",
            "remote",
            "--ascii-mode",
            "tree",
            "--reverse",
            "--show-cycles",
            "--fail-on-cycles",
            "--output",
            "graph.txt",
            "--config",
            "custom.yml",
            "--quiet",
        ])
        .unwrap();

        assert_eq!(args.repo_mode, Some(RepoMode::Remote));
        assert_eq!(args.ascii_mode, Some(AsciiMode::Tree));
        assert!(args.reverse);
        assert!(args.show_cycles);
        assert!(args.fail_on_cycles);
        assert!(args.quiet);
        assert_eq!(args.output, Some(PathBuf::from("graph.txt")));
        assert_eq!(args.config, Some(PathBuf::from("custom.yml")));
    }

    #[test]
    fn test_parse_short_mode_flags() {
        let args =
            Args::try_parse_from(["depviz", "-m", "local", "-a", "list", "-p", "x"]).unwrap();
        assert_eq!(args.repo_mode, Some(RepoMode::Local));
        assert_eq!(args.ascii_mode, Some(AsciiMode::List));
    }

    #[test]
    fn test_parse_invalid_repo_mode() {
        let result = Args::try_parse_from(["depviz", "-m", "ftp"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_invalid_ascii_mode() {
        let result = Args::try_parse_from(["depviz", "-a", "graph"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_package_and_repo_are_optional_at_parse_time() {
        let args = Args::try_parse_from(["depviz"]).unwrap();
        assert!(args.package.is_none());
        assert!(args.repo_path.is_none());
    }
}

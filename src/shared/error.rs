use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - graph rendered (cycles, if any, only reported)
    Success = 0,
    /// Dependency cycles were detected and `--fail-on-cycles` was given
    CyclesDetected = 1,
    /// Invalid command-line arguments (clap parsing errors, missing parameters)
    InvalidArguments = 2,
    /// Application error (file I/O error, network error, malformed repository, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::CyclesDetected => write!(f, "Cycles Detected (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for dependency graph resolution.
///
/// Every variant belongs to repository acquisition, configuration or output;
/// the graph engine itself has no failure path.
#[derive(Debug, Error)]
pub enum DepVizError {
    #[error("Repository file not found: {path}\n\n💡 Hint: {suggestion}")]
    RepositoryNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse repository descriptor from {origin}\nDetails: {details}\n\n💡 Hint: The repository must be a JSON object mapping package names to objects with a \"depends\" array")]
    RepositoryParseError { origin: String, details: String },

    #[error("Failed to fetch repository from {url}\nDetails: {details}\n\n💡 Hint: Please check your internet connection and the repository URL")]
    RemoteFetchError { url: String, details: String },

    #[error("Invalid repository source: {location}\nReason: {reason}\n\n💡 Hint: Use --repo-mode local for file paths and --repo-mode remote for http(s) URLs")]
    InvalidSource { location: String, reason: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Missing required parameter: {parameter}\n\n💡 Hint: Pass --{parameter} on the command line or set '{config_key}' in depviz.config.yml")]
    MissingParameter {
        parameter: String,
        config_key: String,
    },

    /// Validation error for config values and builder patterns
    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl DepVizError {
    /// Exit code the CLI should use when this error aborts a run
    pub fn exit_code(&self) -> ExitCode {
        match self {
            DepVizError::MissingParameter { .. } => ExitCode::InvalidArguments,
            _ => ExitCode::ApplicationError,
        }
    }
}

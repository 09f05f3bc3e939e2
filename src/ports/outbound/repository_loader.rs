use crate::dependency_resolution::domain::RepositoryDescriptor;
use crate::shared::Result;
use std::fmt;

/// Where a repository descriptor is acquired from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepoMode {
    /// A JSON file on the local file system
    Local,
    /// A JSON document served over http(s)
    Remote,
}

impl RepoMode {
    /// Guesses the mode from the shape of a location string
    pub fn infer(location: &str) -> Self {
        let lowered = location.to_ascii_lowercase();
        if lowered.starts_with("http://") || lowered.starts_with("https://") {
            RepoMode::Remote
        } else {
            RepoMode::Local
        }
    }
}

impl std::str::FromStr for RepoMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" => Ok(RepoMode::Local),
            "remote" => Ok(RepoMode::Remote),
            _ => Err(format!(
                "Invalid repo mode: {}. Please specify 'local' or 'remote'",
                s
            )),
        }
    }
}

impl fmt::Display for RepoMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepoMode::Local => write!(f, "local"),
            RepoMode::Remote => write!(f, "remote"),
        }
    }
}

/// Location and access mode of a repository descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositorySource {
    pub location: String,
    pub mode: RepoMode,
}

impl RepositorySource {
    pub fn new(location: impl Into<String>, mode: RepoMode) -> Self {
        Self {
            location: location.into(),
            mode,
        }
    }
}

impl fmt::Display for RepositorySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.location, self.mode)
    }
}

/// RepositoryLoader port for acquiring a repository descriptor
///
/// This port is the only way the application obtains package data; the
/// graph engine depends on the loaded value, never on the loader.
pub trait RepositoryLoader {
    /// Loads and parses the repository descriptor at `source`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The source does not exist or is not reachable
    /// - The source string does not fit the loader (e.g. not a URL)
    /// - The content is not a valid repository descriptor
    fn load(&self, source: &RepositorySource) -> Result<RepositoryDescriptor>;
}

impl<T: RepositoryLoader + ?Sized> RepositoryLoader for Box<T> {
    fn load(&self, source: &RepositorySource) -> Result<RepositoryDescriptor> {
        (**self).load(source)
    }
}

use crate::adapters::outbound::filesystem::FileSystemRepositoryLoader;
use crate::adapters::outbound::network::HttpRepositoryLoader;
use crate::ports::outbound::{RepoMode, RepositoryLoader};
use crate::shared::Result;

/// Factory selecting the repository loader adapter for a source mode
pub struct LoaderFactory;

impl LoaderFactory {
    /// Creates the loader for `mode`
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be initialized
    pub fn create(mode: RepoMode) -> Result<Box<dyn RepositoryLoader>> {
        Ok(match mode {
            RepoMode::Local => Box::new(FileSystemRepositoryLoader::new()),
            RepoMode::Remote => Box::new(HttpRepositoryLoader::new()?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::RepositorySource;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_create_local_loader_reads_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("repo.json");
        fs::write(&path, r#"{"A": {"depends": ["B"]}}"#).unwrap();

        let loader = LoaderFactory::create(RepoMode::Local).unwrap();
        let source = RepositorySource::new(path.to_string_lossy(), RepoMode::Local);
        let repo = loader.load(&source).unwrap();
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn test_create_remote_loader() {
        assert!(LoaderFactory::create(RepoMode::Remote).is_ok());
    }
}

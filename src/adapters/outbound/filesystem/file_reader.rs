use crate::adapters::outbound::json_descriptor::parse_repository_json;
use crate::dependency_resolution::domain::RepositoryDescriptor;
use crate::ports::outbound::{RepositoryLoader, RepositorySource};
use crate::shared::error::DepVizError;
use crate::shared::security::{read_regular_file, MAX_FILE_SIZE};
use crate::shared::Result;
use std::path::Path;

/// FileSystemRepositoryLoader adapter reading a JSON repository from disk
///
/// Symbolic links, directories and files over the size limit are refused
/// before any content is read.
pub struct FileSystemRepositoryLoader;

impl FileSystemRepositoryLoader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemRepositoryLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl RepositoryLoader for FileSystemRepositoryLoader {
    fn load(&self, source: &RepositorySource) -> Result<RepositoryDescriptor> {
        let path = Path::new(&source.location);

        if !path.exists() {
            return Err(DepVizError::RepositoryNotFound {
                path: path.to_path_buf(),
                suggestion: format!(
                    "No repository file exists at \"{}\".\n   \
                     Specify the correct path with --repo-path, or use --repo-mode remote for URLs.",
                    path.display()
                ),
            }
            .into());
        }

        let content = read_regular_file(path, "repository descriptor", MAX_FILE_SIZE).map_err(
            |e| DepVizError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            },
        )?;

        parse_repository_json(&content, &path.display().to_string())
    }
}

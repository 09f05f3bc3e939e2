use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum size of any input file we read (100 MB)
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Fails if `path` exists and is a symbolic link
///
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
/// A missing path is accepted; callers creating new files rely on that.
pub fn reject_symlink(path: &Path, operation: &str) -> Result<()> {
    match fs::symlink_metadata(path) {
        Ok(metadata) if metadata.is_symlink() => anyhow::bail!(
            "Security: {} is a symbolic link. {} operations on symbolic links are not allowed.",
            path.display(),
            operation
        ),
        Ok(_) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => anyhow::bail!(
            "Failed to read metadata for {} operation on {}: {}",
            operation,
            path.display(),
            e
        ),
    }
}

/// Reads a regular file into a string after symlink, type and size checks
///
/// # Arguments
/// * `path` - The file to read
/// * `description` - What the file is (e.g. "repository descriptor"), used in messages
/// * `max_size` - Maximum accepted size in bytes
pub fn read_regular_file(path: &Path, description: &str, max_size: u64) -> Result<String> {
    let metadata = fs::symlink_metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", description, e))?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    validate_file_size(metadata.len(), path, max_size)?;

    fs::read_to_string(path).map_err(|e| anyhow::anyhow!("Failed to read {}: {}", description, e))
}

/// Validates file size is within acceptable limits
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            max_size
        );
    }
    Ok(())
}

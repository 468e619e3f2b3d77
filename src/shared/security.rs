use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum size of a descriptor or config file (100 MB)
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Reads a text file after checking that it is a regular file (not a
/// symbolic link) and that it does not exceed [`MAX_FILE_SIZE`].
///
/// # Arguments
/// * `path` - The file to read
/// * `file_description` - Human-readable description used in error messages
///   (e.g., "artifact descriptor", "config file")
///
/// # Errors
/// Returns an error if the path is missing, a symbolic link, not a regular
/// file, too large, or not valid UTF-8.
pub fn read_checked_file(path: &Path, file_description: &str) -> Result<String> {
    validate_regular_file(path, file_description)?;

    let file_size = fs::metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", file_description, e))?
        .len();
    validate_file_size(file_size, path, MAX_FILE_SIZE)?;

    fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {} {}: {}", file_description, path.display(), e))
}

/// Validates that a path exists and is a regular file (not a directory or symlink)
///
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
pub fn validate_regular_file(path: &Path, file_description: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to read {} metadata for {}: {}",
            file_description,
            path.display(),
            e
        )
    })?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    Ok(())
}

/// Validates that a directory path is not itself a symbolic link.
///
/// Missing paths are accepted; the caller decides whether to create them.
pub fn validate_directory_not_symlink(path: &Path) -> Result<()> {
    match fs::symlink_metadata(path) {
        Ok(metadata) if metadata.is_symlink() => anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, writing through symbolic links is not allowed.",
            path.display()
        ),
        Ok(metadata) if !metadata.is_dir() => {
            anyhow::bail!("{} exists and is not a directory", path.display())
        }
        _ => Ok(()),
    }
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

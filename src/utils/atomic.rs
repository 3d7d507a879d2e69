//! Atomic file write operations.
//!
//! Provides safe atomic file writing using the `tempfile` crate.
//! Temp files are automatically cleaned up on failure.

use std::io;
use std::path::Path;
use tempfile::NamedTempFile;

/// Write content to a file atomically using a temporary file.
///
/// The temp file is created in the same directory as the target (required
/// for atomic rename), filled, then renamed over the target. A reader never
/// observes a half-written record.
///
/// # Errors
///
/// Returns an `io::Error` if:
/// - The parent directory cannot be determined
/// - The temp file cannot be created
/// - Writing to the temp file fails
/// - The atomic rename fails
pub async fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let parent = path
        .parent()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Path has no parent directory"))?
        .to_path_buf();
    let target_path = path.to_path_buf();
    let content_owned = content.to_vec();

    // Run synchronous tempfile operations in a blocking task
    tokio::task::spawn_blocking(move || -> io::Result<()> {
        use std::io::Write;

        let mut temp_file = NamedTempFile::new_in(&parent)?;
        temp_file.write_all(&content_owned)?;
        temp_file.flush()?;

        // Rename consumes the NamedTempFile, preventing auto-deletion
        temp_file.persist(&target_path)?;

        Ok(())
    })
    .await
    .map_err(io::Error::other)?
}

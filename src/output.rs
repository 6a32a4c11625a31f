// src/output.rs
// =============================================================================
// Writes the rendered documents to disk.
//
// Files are truncated and overwritten on every run. On Unix they get mode
// 0644 (owner read/write, group and others read), including files that
// already existed with different permissions.
//
// The two writes are independent: if the second one fails, the first file
// has already been replaced and the run is still reported as failed.
// =============================================================================

use crate::error::WriteError;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use tracing::debug;

#[cfg(unix)]
const FILE_MODE: u32 = 0o644;

// Writes `contents` to `path`, replacing whatever was there
pub fn write_document(path: &Path, contents: &str) -> Result<(), WriteError> {
    write_file(path, contents).map_err(|source| WriteError {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = contents.len(), "document written");
    Ok(())
}

fn write_file(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};
        options.mode(FILE_MODE);
        let mut file = options.open(path)?;
        // mode() only applies when the file is created
        file.set_permissions(std::fs::Permissions::from_mode(FILE_MODE))?;
        file.write_all(contents.as_bytes())?;
        file.flush()
    }

    #[cfg(not(unix))]
    {
        let mut file = options.open(path)?;
        file.write_all(contents.as_bytes())?;
        file.flush()
    }
}

// Writes the markdown document first, then the HTML page
pub fn write_outputs(
    readme_path: &Path,
    readme: &str,
    index_path: &Path,
    index: &str,
) -> Result<(), WriteError> {
    write_document(readme_path, readme)?;
    write_document(index_path, index)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is #[cfg(unix)]?
//    - Conditional compilation: the block only exists when building for Unix
//    - File modes like 0o644 have no meaning on Windows
//
// 2. Why map_err instead of ?
//    - std::io::Error does not know which file it was about
//    - map_err wraps it in WriteError together with the path
// -----------------------------------------------------------------------------

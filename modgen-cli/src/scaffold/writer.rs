//! Create-only file writes

use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;

/// Result of a create-only write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The file was created
    Written,
    /// A file was already present and was left untouched
    AlreadyExists,
}

/// Write `content` to `root/relative` unless the file already exists
///
/// Parent directories are created as needed.
///
/// # Errors
///
/// Returns an error if a directory cannot be created or the file cannot be
/// written.
pub fn write_new_file(root: &Path, relative: &Path, content: &str) -> Result<WriteOutcome> {
    let full_path = root.join(relative);

    if let Some(parent) = full_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let mut file = match OpenOptions::new().write(true).create_new(true).open(&full_path) {
        Ok(file) => file,
        Err(err) if err.kind() == ErrorKind::AlreadyExists => return Ok(WriteOutcome::AlreadyExists),
        Err(err) => {
            return Err(err).with_context(|| format!("Failed to create file: {}", full_path.display()))
        }
    };

    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write file: {}", full_path.display()))?;

    Ok(WriteOutcome::Written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_creates_parents() {
        let dir = tempdir().unwrap();
        let outcome = write_new_file(dir.path(), Path::new("a/b/c.ts"), "x").unwrap();
        assert_eq!(outcome, WriteOutcome::Written);
        assert_eq!(fs::read_to_string(dir.path().join("a/b/c.ts")).unwrap(), "x");
    }

    #[test]
    fn test_existing_file_untouched() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("c.ts"), "old").unwrap();

        let outcome = write_new_file(dir.path(), Path::new("c.ts"), "new").unwrap();
        assert_eq!(outcome, WriteOutcome::AlreadyExists);
        assert_eq!(fs::read_to_string(dir.path().join("c.ts")).unwrap(), "old");
    }
}

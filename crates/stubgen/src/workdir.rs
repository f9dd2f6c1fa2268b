/// Ephemeral working directories
///
/// A `WorkRoot` holds the intermediate source and class files for one
/// packaging invocation. Its name is unique per invocation (process id plus
/// a monotonic counter), so concurrent invocations for same-named contracts
/// cannot collide. Teardown is best-effort: failures are collected and
/// reported to the caller instead of raised.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

/// Working root for one packaging invocation
#[derive(Debug)]
pub struct WorkRoot {
    path: PathBuf,
}

impl WorkRoot {
    /// Create a unique working root under the system temp directory
    pub fn create(tag: &str) -> io::Result<Self> {
        let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
        let path = std::env::temp_dir().join(format!(
            "stubgen-{}-{}-{}",
            tag,
            std::process::id(),
            id
        ));
        fs::create_dir_all(&path)?;
        Ok(Self { path })
    }

    /// Path of the working root
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Recursively delete the working root and everything beneath it
    ///
    /// Deletion failures are suppressed and returned as `(path, error)`
    /// pairs; an empty list means the whole tree was removed.
    pub fn remove_all(&self) -> Vec<(PathBuf, io::Error)> {
        let mut suppressed = Vec::new();
        remove_tree(&self.path, &mut suppressed);
        suppressed
    }
}

/// Post-order recursive delete: files first, then the directory itself
fn remove_tree(path: &Path, suppressed: &mut Vec<(PathBuf, io::Error)>) {
    match fs::read_dir(path) {
        Ok(entries) => {
            for entry in entries {
                match entry {
                    Ok(entry) => {
                        let child = entry.path();
                        // file_type() does not follow symlinks, so a linked
                        // directory is unlinked rather than descended into
                        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
                        if is_dir {
                            remove_tree(&child, suppressed);
                        } else if let Err(error) = fs::remove_file(&child) {
                            suppressed.push((child, error));
                        }
                    }
                    Err(error) => suppressed.push((path.to_path_buf(), error)),
                }
            }
            if let Err(error) = fs::remove_dir(path) {
                suppressed.push((path.to_path_buf(), error));
            }
        }
        Err(error) => suppressed.push((path.to_path_buf(), error)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_all_deletes_nested_tree() {
        let work = WorkRoot::create("RemoveAll").unwrap();
        let nested = work.path().join("a/b/c");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("X.class"), b"bytes").unwrap();
        fs::write(work.path().join("top.txt"), b"bytes").unwrap();

        let suppressed = work.remove_all();
        assert!(suppressed.is_empty(), "unexpected failures: {:?}", suppressed);
        assert!(!work.path().exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_remove_all_unlinks_symlinked_dirs_without_descending() {
        let work = WorkRoot::create("Symlink").unwrap();
        let target = tempfile::tempdir().unwrap();
        fs::write(target.path().join("keep.txt"), b"keep").unwrap();
        std::os::unix::fs::symlink(target.path(), work.path().join("link")).unwrap();

        let suppressed = work.remove_all();
        assert!(suppressed.is_empty(), "unexpected failures: {:?}", suppressed);
        assert!(!work.path().exists());
        // The link target's contents survive
        assert!(target.path().join("keep.txt").exists());
    }

    #[test]
    fn test_roots_are_unique_per_invocation() {
        let first = WorkRoot::create("Unique").unwrap();
        let second = WorkRoot::create("Unique").unwrap();
        assert_ne!(first.path(), second.path());

        first.remove_all();
        second.remove_all();
    }
}

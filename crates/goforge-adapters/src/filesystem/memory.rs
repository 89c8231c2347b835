//! In-memory filesystem for tests.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use goforge_core::{
    application::{ports::Filesystem, ApplicationError},
    error::GoforgeResult,
};

#[derive(Debug, Default)]
struct Inner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
    executables: HashSet<PathBuf>,
    denied: HashSet<PathBuf>,
}

/// In-memory filesystem, shared across clones.
///
/// Used by service-level tests to assert on the exact set of
/// directories and files a scaffold run produced without touching disk.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<Inner>>,
}

impl MemoryFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read back a file written through the port.
    pub fn read_file(&self, path: &Path) -> Option<String> {
        self.inner.read().ok()?.files.get(path).cloned()
    }

    /// Whether a path was marked executable.
    pub fn is_executable(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.executables.contains(path))
            .unwrap_or(false)
    }

    /// All files written, sorted by path.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = self
            .inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default();
        files.sort();
        files
    }

    /// All directories created explicitly, sorted by path.
    pub fn list_dirs(&self) -> Vec<PathBuf> {
        let mut dirs: Vec<PathBuf> = self
            .inner
            .read()
            .map(|inner| inner.directories.iter().cloned().collect())
            .unwrap_or_default();
        dirs.sort();
        dirs
    }

    /// Make the next `create_dir_all` call for this path fail.
    pub fn deny_dir(&self, path: &Path) {
        if let Ok(mut inner) = self.inner.write() {
            inner.denied.insert(path.to_path_buf());
        }
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> GoforgeResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?;
        if inner.denied.remove(path) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Permission denied".to_string(),
            }
            .into());
        }
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> GoforgeResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?;
        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn set_permissions(&self, path: &Path, executable: bool) -> GoforgeResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?;
        if executable {
            inner.executables.insert(path.to_path_buf());
        } else {
            inner.executables.remove(path);
        }
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_then_read_roundtrips() {
        let fs = MemoryFilesystem::new();
        let path = Path::new("project/go.mod");

        fs.write_file(path, "module example.com/x\n").unwrap();
        assert_eq!(fs.read_file(path).as_deref(), Some("module example.com/x\n"));
        assert!(fs.exists(path));
    }

    #[test]
    fn create_dir_all_records_ancestors() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("project/internal/api/router"))
            .unwrap();

        assert!(fs.exists(Path::new("project")));
        assert!(fs.exists(Path::new("project/internal")));
        assert!(fs.exists(Path::new("project/internal/api/router")));
    }

    #[test]
    fn executable_flag_is_per_path() {
        let fs = MemoryFilesystem::new();
        let script = Path::new("project/docker-entrypoint.sh");
        let plain = Path::new("project/makefile");

        fs.write_file(script, "#!/bin/sh\n").unwrap();
        fs.write_file(plain, "run:\n").unwrap();
        fs.set_permissions(script, true).unwrap();

        assert!(fs.is_executable(script));
        assert!(!fs.is_executable(plain));
    }

    #[test]
    fn denied_dir_fails_once_then_recovers() {
        let fs = MemoryFilesystem::new();
        let path = Path::new("project/config/db");

        fs.deny_dir(path);
        assert!(fs.create_dir_all(path).is_err());
        assert!(!fs.exists(path));

        assert!(fs.create_dir_all(path).is_ok());
        assert!(fs.exists(path));
    }

    #[test]
    fn clones_share_state() {
        let fs = MemoryFilesystem::new();
        let clone = fs.clone();

        clone.write_file(Path::new("a.txt"), "hi").unwrap();
        assert!(fs.exists(Path::new("a.txt")));
    }
}

//! In-memory file sink for testing.

use std::{
    collections::{BTreeMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use svcgen_core::{
    application::{ApplicationError, ports::FileSink},
    error::SvcgenResult,
};

/// In-memory sink for testing.
///
/// Clones share state, so a test can hand one clone to the service and
/// inspect the other.
#[derive(Debug, Clone, Default)]
pub struct MemoryFileSink {
    inner: Arc<RwLock<MemoryFileSinkInner>>,
}

#[derive(Debug, Default)]
struct MemoryFileSinkInner {
    files: BTreeMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
    /// Writes still allowed before every further write fails.
    writes_left: Option<usize>,
}

impl MemoryFileSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink that accepts `n` writes and fails every one after that.
    pub fn fail_after(n: usize) -> Self {
        let sink = Self::new();
        if let Ok(mut inner) = sink.inner.write() {
            inner.writes_left = Some(n);
        }
        sink
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// Seed a file as if it had been there before generation.
    pub fn insert_file(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        if let Ok(mut inner) = self.inner.write() {
            let path = path.into();
            register_ancestors(&mut inner.directories, path.parent());
            inner.files.insert(path, content.into());
        }
    }

    /// All file paths, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }
}

impl FileSink for MemoryFileSink {
    fn create_dir_all(&self, path: &Path) -> SvcgenResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::SinkLockError)?;

        register_ancestors(&mut inner.directories, Some(path));
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> SvcgenResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::SinkLockError)?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        match inner.writes_left {
            Some(0) => {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Simulated write failure".into(),
                }
                .into());
            }
            Some(ref mut left) => *left -= 1,
            None => {}
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }
}

fn register_ancestors(directories: &mut HashSet<PathBuf>, path: Option<&Path>) {
    let Some(path) = path else { return };
    let mut current = PathBuf::new();
    for component in path.components() {
        current.push(component);
        directories.insert(current.clone());
    }
}

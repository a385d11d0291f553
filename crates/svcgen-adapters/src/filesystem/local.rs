//! Local filesystem sink using std::fs.

use std::io;
use std::path::Path;

use svcgen_core::{
    application::{ApplicationError, ports::FileSink},
    error::{SvcgenError, SvcgenResult},
};

/// Production sink writing through `std::fs`.
///
/// `write_file` truncates existing files. Nothing written is ever removed.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSink;

impl LocalFileSink {
    pub fn new() -> Self {
        Self
    }
}

impl FileSink for LocalFileSink {
    fn create_dir_all(&self, path: &Path) -> SvcgenResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> SvcgenResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> SvcgenError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn create_dir_all_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("apps/billing/k8s");

        LocalFileSink.create_dir_all(&dir).unwrap();
        LocalFileSink.create_dir_all(&dir).unwrap();

        assert!(dir.is_dir());
    }

    #[test]
    fn write_file_replaces_existing_content() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("main.py");
        fs::write(&file, "hand edited\nand much longer than the replacement\n").unwrap();

        LocalFileSink.write_file(&file, "generated\n").unwrap();

        assert_eq!(fs::read_to_string(&file).unwrap(), "generated\n");
        assert!(LocalFileSink.exists(&file));
    }

    #[test]
    fn write_without_parent_reports_the_path() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("missing/main.py");

        let err = LocalFileSink.write_file(&file, "x").unwrap_err();

        match err {
            SvcgenError::Application(ApplicationError::FilesystemError { path, reason }) => {
                assert_eq!(path, file);
                assert!(reason.starts_with("Failed to write file"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn directory_in_place_of_file_fails() {
        let tmp = TempDir::new().unwrap();
        let clash = tmp.path().join("Dockerfile");
        fs::create_dir(&clash).unwrap();

        assert!(LocalFileSink.write_file(&clash, "FROM scratch\n").is_err());
    }
}

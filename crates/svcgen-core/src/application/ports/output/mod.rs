//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `svcgen-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::Blueprint;
use crate::error::SvcgenResult;

/// Port through which rendered files reach storage.
///
/// Implemented by:
/// - `svcgen_adapters::LocalFileSink` (production)
/// - `svcgen_adapters::MemoryFileSink` (testing)
///
/// ## Contract
///
/// - `create_dir_all` succeeds when the directory already exists
/// - `write_file` truncates and replaces any existing file
/// - Nothing is rolled back; a failed write leaves earlier writes in place
#[cfg_attr(test, mockall::automock)]
pub trait FileSink: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> SvcgenResult<()>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> SvcgenResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for obtaining the blueprint to render.
///
/// Implemented by:
/// - `svcgen_adapters::BuiltinBlueprint` (the templates compiled into the binary)
pub trait BlueprintSource: Send + Sync {
    fn load(&self) -> SvcgenResult<Blueprint>;
}

//! Driven port for filesystem access.
//!
//! The scaffolder never touches `std::fs` directly; it goes through
//! this trait. `modgen-adapters` provides the implementations:
//! - `LocalFilesystem` (production)
//! - `MemoryFilesystem` (testing)

use std::path::Path;

use crate::error::ScaffoldResult;

/// Port for the blocking filesystem operations the pipeline needs.
pub trait Filesystem: Send + Sync {
    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Create a single directory, non-recursively.
    ///
    /// Must fail with [`crate::ScaffoldError::DirectoryExists`] if the
    /// directory is already present, and with
    /// [`crate::ScaffoldError::TemplateIo`] if the parent is missing.
    /// Recursive creation would mask ordering bugs in a variant's
    /// `directory_tree`.
    fn create_dir(&self, path: &Path) -> ScaffoldResult<()>;

    /// Read an entire file as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> ScaffoldResult<String>;

    /// Write text to a file, creating it.
    fn write_file(&self, path: &Path, content: &str) -> ScaffoldResult<()>;
}

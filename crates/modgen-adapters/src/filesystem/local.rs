//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use modgen_core::{Filesystem, ScaffoldError, ScaffoldResult};
use tracing::trace;

/// Production filesystem implementation using `std::fs`.
///
/// Directory creation is `fs::create_dir`, not `create_dir_all`: the
/// scaffold pipeline declares its creation order explicitly, and a
/// recursive mkdir would hide a misordered `directory_tree`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir(&self, path: &Path) -> ScaffoldResult<()> {
        trace!(path = %path.display(), "create_dir");
        std::fs::create_dir(path).map_err(|e| {
            if e.kind() == io::ErrorKind::AlreadyExists {
                ScaffoldError::DirectoryExists {
                    path: path.to_path_buf(),
                }
            } else {
                map_io_error(path, e, "create directory")
            }
        })
    }

    fn read_to_string(&self, path: &Path) -> ScaffoldResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read template"))
    }

    fn write_file(&self, path: &Path, content: &str) -> ScaffoldResult<()> {
        trace!(path = %path.display(), "write_file");
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> ScaffoldError {
    ScaffoldError::TemplateIo {
        path: path.to_path_buf(),
        reason: format!("failed to {operation}: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_dir_twice_reports_conflict() {
        let temp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let dir = temp.path().join("geometry");

        fs.create_dir(&dir).unwrap();
        let err = fs.create_dir(&dir).unwrap_err();
        assert_eq!(err, ScaffoldError::DirectoryExists { path: dir });
    }

    #[test]
    fn create_dir_without_parent_is_io_error() {
        let temp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let dir = temp.path().join("missing/child");

        let err = fs.create_dir(&dir).unwrap_err();
        assert!(matches!(err, ScaffoldError::TemplateIo { .. }));
    }

    #[test]
    fn read_missing_template_carries_path() {
        let temp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let path = temp.path().join("lib.h.in");

        match fs.read_to_string(&path) {
            Err(ScaffoldError::TemplateIo { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected TemplateIo, got {other:?}"),
        }
    }

    #[test]
    fn write_then_read_round_trips() {
        let temp = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let path = temp.path().join("out.cpp");

        fs.write_file(&path, "int main() {}\n").unwrap();
        assert_eq!(fs.read_to_string(&path).unwrap(), "int main() {}\n");
        assert!(fs.exists(&path));
    }
}

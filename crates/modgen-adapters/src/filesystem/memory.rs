//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use modgen_core::{Filesystem, ScaffoldError, ScaffoldResult};

/// In-memory filesystem for testing.
///
/// Enforces the same contract as [`super::LocalFilesystem`]:
/// `create_dir` is non-recursive and fails on collisions, so tests over
/// this double exercise the parent-before-child ordering for real.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a directory and all of its ancestors (testing helper).
    pub fn add_dir(&self, path: &Path) {
        let mut inner = self.inner.write().unwrap();
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }
    }

    /// Seed a file without a parent-directory check (testing helper).
    pub fn add_file(&self, path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            self.add_dir(parent);
        }
        let mut inner = self.inner.write().unwrap();
        inner.files.insert(path.to_path_buf(), content.to_string());
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// List all files, sorted for stable assertions.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        let mut files: Vec<_> = inner.files.keys().cloned().collect();
        files.sort();
        files
    }

    /// Count directories created so far.
    pub fn directory_count(&self) -> usize {
        self.inner.read().unwrap().directories.len()
    }
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }

    fn create_dir(&self, path: &Path) -> ScaffoldResult<()> {
        let mut inner = self.inner.write().unwrap();

        if inner.directories.contains(path) {
            return Err(ScaffoldError::DirectoryExists {
                path: path.to_path_buf(),
            });
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ScaffoldError::TemplateIo {
                    path: path.to_path_buf(),
                    reason: "parent directory does not exist".into(),
                });
            }
        }

        inner.directories.insert(path.to_path_buf());
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> ScaffoldResult<String> {
        let inner = self.inner.read().unwrap();
        inner
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| ScaffoldError::TemplateIo {
                path: path.to_path_buf(),
                reason: "no such file".into(),
            })
    }

    fn write_file(&self, path: &Path, content: &str) -> ScaffoldResult<()> {
        let mut inner = self.inner.write().unwrap();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ScaffoldError::TemplateIo {
                    path: path.to_path_buf(),
                    reason: "parent directory does not exist".into(),
                });
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_dir_requires_parent() {
        let fs = MemoryFilesystem::new();
        let err = fs.create_dir(Path::new("a/b")).unwrap_err();
        assert!(matches!(err, ScaffoldError::TemplateIo { .. }));

        fs.add_dir(Path::new("a"));
        fs.create_dir(Path::new("a/b")).unwrap();
        assert!(fs.exists(Path::new("a/b")));
    }

    #[test]
    fn create_dir_rejects_duplicates() {
        let fs = MemoryFilesystem::new();
        fs.create_dir(Path::new("module")).unwrap();
        assert_eq!(
            fs.create_dir(Path::new("module")),
            Err(ScaffoldError::DirectoryExists {
                path: PathBuf::from("module"),
            })
        );
    }

    #[test]
    fn write_requires_parent_directory() {
        let fs = MemoryFilesystem::new();
        let err = fs.write_file(Path::new("src/x.cpp"), "x").unwrap_err();
        assert!(matches!(err, ScaffoldError::TemplateIo { .. }));
    }

    #[test]
    fn seeded_files_are_readable() {
        let fs = MemoryFilesystem::new();
        fs.add_file(Path::new("example_library.in/lib.h.in"), "class ExLib;");
        assert_eq!(
            fs.read_to_string(Path::new("example_library.in/lib.h.in"))
                .unwrap(),
            "class ExLib;"
        );
        assert!(fs.exists(Path::new("example_library.in")));
    }
}

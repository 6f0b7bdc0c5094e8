//! Unified error handling for Modgen Core.
//!
//! Every failure mode of the scaffold pipeline maps to exactly one
//! variant here. All variants are:
//! - Cloneable (plain `String` reasons instead of live `io::Error`s)
//! - Categorizable (for CLI display and exit codes)
//! - Actionable (provides suggestions)

use std::path::PathBuf;
use thiserror::Error;

/// Root error type for scaffolding operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScaffoldError {
    /// The module name was empty.
    #[error("module name cannot be empty")]
    EmptyModuleName,

    /// The `*.in` template directory is absent from the working directory.
    #[error("template directory not found: {path}")]
    MissingTemplateRoot { path: PathBuf },

    /// A directory in the scaffold tree already exists.
    ///
    /// This is a "create new module" tool, not a sync tool — rerunning
    /// with a name that was already scaffolded is expected to land here.
    #[error("directory already exists: {path}")]
    DirectoryExists { path: PathBuf },

    /// A template could not be read, or an output could not be written.
    #[error("template I/O failed at {path}: {reason}")]
    TemplateIo { path: PathBuf, reason: String },
}

impl ScaffoldError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyModuleName => vec![
                "Pass a module name, e.g. `modgen library geometry`".into(),
            ],
            Self::MissingTemplateRoot { path } => vec![
                format!("Expected template directory: {}", path.display()),
                "Run the tool from the directory that contains the `*.in` templates".into(),
            ],
            Self::DirectoryExists { path } => vec![
                format!("'{}' was already created", path.display()),
                "Choose a different module name".into(),
                "Or remove the existing directory first".into(),
            ],
            Self::TemplateIo { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have read/write permissions".into(),
                "Directories created before the failure were left in place".into(),
            ],
        }
    }

    /// Error category for CLI display styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyModuleName => ErrorCategory::Validation,
            Self::MissingTemplateRoot { .. } => ErrorCategory::NotFound,
            Self::DirectoryExists { .. } => ErrorCategory::Conflict,
            Self::TemplateIo { .. } => ErrorCategory::Io,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Conflict,
    Io,
}

/// Convenient result type alias.
pub type ScaffoldResult<T> = Result<T, ScaffoldError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_is_validation() {
        assert_eq!(
            ScaffoldError::EmptyModuleName.category(),
            ErrorCategory::Validation
        );
    }

    #[test]
    fn missing_root_is_not_found() {
        let err = ScaffoldError::MissingTemplateRoot {
            path: PathBuf::from("example_library.in"),
        };
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }

    #[test]
    fn existing_directory_is_conflict() {
        let err = ScaffoldError::DirectoryExists {
            path: PathBuf::from("../../libraries/geometry"),
        };
        assert_eq!(err.category(), ErrorCategory::Conflict);
        assert!(err.suggestions().iter().any(|s| s.contains("different")));
    }

    #[test]
    fn template_io_carries_offending_path() {
        let err = ScaffoldError::TemplateIo {
            path: PathBuf::from("example_library.in/lib.h.in"),
            reason: "permission denied".into(),
        };
        assert_eq!(err.category(), ErrorCategory::Io);
        assert!(err.to_string().contains("lib.h.in"));
    }
}

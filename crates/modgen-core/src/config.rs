//! Scaffold variant configuration and the runtime request.
//!
//! A [`ScaffoldConfig`] is pure `'static` data: one record per variant,
//! fixed at compile time. The three builtin records live in
//! [`crate::variants`]. The only runtime input is the module name,
//! wrapped in a validated [`ScaffoldRequest`].

use crate::error::{ScaffoldError, ScaffoldResult};

/// One template file to generate: where to read it from and where the
/// substituted result goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateFile {
    /// Path relative to [`ScaffoldConfig::input_template_root`].
    pub source: &'static str,
    /// Path template relative to [`ScaffoldConfig::destination_root`].
    /// May contain the placeholder token in any segment.
    pub output: &'static str,
}

/// Static description of one scaffolder variant.
///
/// Invariant: `directory_tree` is ordered parent-before-child. Every
/// directory's parent either appears earlier in the list or pre-exists
/// as part of the surrounding project (`destination_root` itself is
/// never created by the tool).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaffoldConfig {
    /// Display name for logs and `--dry-run` output.
    pub variant: &'static str,
    /// Literal token replaced by the module name, in both file contents
    /// and path templates.
    pub placeholder_token: &'static str,
    /// Template directory, relative to the current working directory.
    /// Must already exist; supplied by the surrounding project.
    pub input_template_root: &'static str,
    /// Root under which the module tree is created. Assumed to exist.
    pub destination_root: &'static str,
    /// Ordered directory path templates, relative to `destination_root`.
    pub directory_tree: &'static [&'static str],
    /// Ordered template/output pairs.
    pub template_files: &'static [TemplateFile],
}

impl ScaffoldConfig {
    /// Replace every occurrence of the placeholder token in `text`.
    ///
    /// Plain case-sensitive substring replacement — deliberately not a
    /// templating pass. If the token happens to appear inside unrelated
    /// text it is replaced anyway.
    pub fn substitute(&self, text: &str, module_name: &str) -> String {
        text.replace(self.placeholder_token, module_name)
    }
}

/// The single runtime input: a validated module name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldRequest {
    module_name: String,
}

impl ScaffoldRequest {
    /// Create a request, rejecting empty (or all-whitespace) names.
    ///
    /// Presence is the only check — anything the host filesystem
    /// accepts as a directory name is allowed.
    pub fn new(module_name: impl Into<String>) -> ScaffoldResult<Self> {
        let module_name = module_name.into();
        if module_name.trim().is_empty() {
            return Err(ScaffoldError::EmptyModuleName);
        }
        Ok(Self { module_name })
    }

    pub fn module_name(&self) -> &str {
        &self.module_name
    }
}

impl std::fmt::Display for ScaffoldRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.module_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: ScaffoldConfig = ScaffoldConfig {
        variant: "test",
        placeholder_token: "ExLib",
        input_template_root: "example_library.in",
        destination_root: ".",
        directory_tree: &["ExLib"],
        template_files: &[],
    };

    #[test]
    fn request_rejects_empty_name() {
        assert_eq!(ScaffoldRequest::new(""), Err(ScaffoldError::EmptyModuleName));
    }

    #[test]
    fn request_rejects_whitespace_name() {
        assert_eq!(
            ScaffoldRequest::new("   "),
            Err(ScaffoldError::EmptyModuleName)
        );
    }

    #[test]
    fn request_accepts_ordinary_name() {
        let req = ScaffoldRequest::new("super_dooooooper_window_2").unwrap();
        assert_eq!(req.module_name(), "super_dooooooper_window_2");
    }

    #[test]
    fn substitution_replaces_every_occurrence() {
        let out = CONFIG.substitute("class ExLib { ExLib(); };", "Geometry");
        assert_eq!(out, "class Geometry { Geometry(); };");
        assert!(!out.contains("ExLib"));
    }

    #[test]
    fn substitution_is_case_sensitive() {
        let out = CONFIG.substitute("exlib EXLIB ExLib", "x");
        assert_eq!(out, "exlib EXLIB x");
    }

    #[test]
    fn substitution_hits_unrelated_text_too() {
        // Naive replacement by design: the token is replaced even when it
        // is part of a longer word.
        let out = CONFIG.substitute("ExLibrary", "Geo");
        assert_eq!(out, "Georary");
    }
}

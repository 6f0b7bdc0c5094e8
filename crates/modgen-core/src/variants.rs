//! The builtin scaffolder variants.
//!
//! Three data records, one shared pipeline. The library and window
//! trees mirror the Atelier include convention
//! (`include/atelier/<group>/<module>/`), so generated headers are
//! included as e.g. `#include <atelier/libraries/geometry/geometry.h>`.
//! The local-window variant keeps the older flat layout
//! (`<module>/include/<module>/`) and scaffolds into the current
//! directory instead of the shared `windows/` root.

use crate::config::{ScaffoldConfig, TemplateFile};

/// Scaffold a library module under `../../libraries/`.
pub const LIBRARY: ScaffoldConfig = ScaffoldConfig {
    variant: "library",
    placeholder_token: "ExLib",
    input_template_root: "example_library.in",
    destination_root: "../../libraries",
    directory_tree: &[
        "ExLib",
        "ExLib/include",
        "ExLib/include/atelier",
        "ExLib/include/atelier/libraries",
        "ExLib/include/atelier/libraries/ExLib",
        "ExLib/src",
    ],
    template_files: &[
        TemplateFile {
            source: "lib.h.in",
            output: "ExLib/include/atelier/libraries/ExLib/ExLib.h",
        },
        TemplateFile {
            source: "lib.cpp.in",
            output: "ExLib/src/ExLib.cpp",
        },
        TemplateFile {
            source: "lib.cmake.in",
            output: "ExLib/CMakeLists.txt",
        },
    ],
};

/// Scaffold a Qt window module under `../../windows/`.
pub const WINDOW: ScaffoldConfig = ScaffoldConfig {
    variant: "window",
    placeholder_token: "ExWindow",
    input_template_root: "example_window.in",
    destination_root: "../../windows",
    directory_tree: &[
        "ExWindow",
        "ExWindow/include",
        "ExWindow/include/atelier",
        "ExWindow/include/atelier/windows",
        "ExWindow/include/atelier/windows/ExWindow",
        "ExWindow/src",
    ],
    template_files: &[
        TemplateFile {
            source: "win.h.in",
            output: "ExWindow/include/atelier/windows/ExWindow/ExWindow.h",
        },
        TemplateFile {
            source: "win.cpp.in",
            output: "ExWindow/src/ExWindow.cpp",
        },
        TemplateFile {
            source: "win.ui.in",
            output: "ExWindow/src/ExWindow.ui",
        },
        TemplateFile {
            source: "win.cmake.in",
            output: "ExWindow/CMakeLists.txt",
        },
    ],
};

/// Scaffold a window module in place, with the flat include layout.
pub const LOCAL_WINDOW: ScaffoldConfig = ScaffoldConfig {
    variant: "local-window",
    placeholder_token: "ExWindow",
    input_template_root: "example_window.in",
    destination_root: ".",
    directory_tree: &[
        "ExWindow",
        "ExWindow/include",
        "ExWindow/include/ExWindow",
        "ExWindow/src",
    ],
    template_files: &[
        TemplateFile {
            source: "win.h.in",
            output: "ExWindow/include/ExWindow/ExWindow.h",
        },
        TemplateFile {
            source: "win.cpp.in",
            output: "ExWindow/src/ExWindow.cpp",
        },
        TemplateFile {
            source: "win.ui.in",
            output: "ExWindow/src/ExWindow.ui",
        },
        TemplateFile {
            source: "win.cmake.in",
            output: "ExWindow/CMakeLists.txt",
        },
    ],
};

/// All builtin variants, for listing and invariant tests.
pub fn all() -> &'static [ScaffoldConfig] {
    &[LIBRARY, WINDOW, LOCAL_WINDOW]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_builtin_variants() {
        assert_eq!(all().len(), 3);
    }

    #[test]
    fn window_variants_share_token_and_templates() {
        assert_eq!(WINDOW.placeholder_token, LOCAL_WINDOW.placeholder_token);
        assert_eq!(
            WINDOW.input_template_root,
            LOCAL_WINDOW.input_template_root
        );
    }

    #[test]
    fn library_uses_its_own_token() {
        assert_eq!(LIBRARY.placeholder_token, "ExLib");
        assert_eq!(WINDOW.placeholder_token, "ExWindow");
    }

    #[test]
    fn every_path_template_is_relative() {
        for config in all() {
            for dir in config.directory_tree {
                assert!(!dir.starts_with('/'), "{dir} must be relative");
            }
            for file in config.template_files {
                assert!(!file.output.starts_with('/'));
                assert!(!file.source.contains('/'), "templates are flat files");
            }
        }
    }
}

//! Plan resolution: a config plus a request, with every path template
//! substituted into a concrete path.
//!
//! Resolution is pure — no filesystem access — so the same plan backs
//! both real execution and `--dry-run` previews.

use std::path::{Path, PathBuf};

use crate::config::{ScaffoldConfig, ScaffoldRequest};

/// A resolved file job: read `source`, substitute, write `output`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    pub source: PathBuf,
    pub output: PathBuf,
}

/// Fully resolved scaffold plan for one invocation.
///
/// `directories` preserves the parent-before-child order declared in
/// the config; the scaffolder creates them one by one, non-recursively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldPlan {
    pub template_root: PathBuf,
    pub directories: Vec<PathBuf>,
    pub files: Vec<PlannedFile>,
}

impl ScaffoldConfig {
    /// Resolve all path templates against the request's module name.
    pub fn resolve(&self, request: &ScaffoldRequest) -> ScaffoldPlan {
        let name = request.module_name();
        let destination = Path::new(self.destination_root);
        let template_root = PathBuf::from(self.input_template_root);

        let directories = self
            .directory_tree
            .iter()
            .map(|dir| destination.join(self.substitute(dir, name)))
            .collect();

        let files = self
            .template_files
            .iter()
            .map(|file| PlannedFile {
                source: template_root.join(file.source),
                output: destination.join(self.substitute(file.output, name)),
            })
            .collect();

        ScaffoldPlan {
            template_root,
            directories,
            files,
        }
    }
}

//! The scaffold pipeline: validate → create directories → generate files.
//!
//! One linear pass, no retries, no rollback. If a step fails, whatever
//! earlier steps created stays on disk; the user cleans up by hand.
//! That matches the tool's one-shot interactive use and keeps reruns
//! honest: a leftover tree makes the next attempt fail loudly with
//! `DirectoryExists` instead of silently merging.

use tracing::{debug, info, instrument};

use crate::{
    config::{ScaffoldConfig, ScaffoldRequest},
    error::{ScaffoldError, ScaffoldResult},
    plan::ScaffoldPlan,
    ports::Filesystem,
};

/// Executes scaffold plans against a [`Filesystem`].
pub struct Scaffolder {
    filesystem: Box<dyn Filesystem>,
}

impl Scaffolder {
    /// Create a scaffolder backed by the given filesystem adapter.
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Scaffold a new module.
    ///
    /// Preconditions are checked first (template root present), then
    /// directories are created strictly in config order, then each
    /// template is read, substituted, and written. Returns the executed
    /// plan so callers can report what was created.
    #[instrument(skip_all, fields(variant = config.variant, module = %request))]
    pub fn scaffold(
        &self,
        config: &ScaffoldConfig,
        request: &ScaffoldRequest,
    ) -> ScaffoldResult<ScaffoldPlan> {
        let plan = config.resolve(request);

        if !self.filesystem.exists(&plan.template_root) {
            return Err(ScaffoldError::MissingTemplateRoot {
                path: plan.template_root.clone(),
            });
        }

        info!("creating directory structure");
        for dir in &plan.directories {
            debug!(path = %dir.display(), "mkdir");
            self.filesystem.create_dir(dir)?;
        }

        for file in &plan.files {
            info!(output = %file.output.display(), "generating file");
            let content = self.filesystem.read_to_string(&file.source)?;
            let rendered = config.substitute(&content, request.module_name());
            self.filesystem.write_file(&file.output, &rendered)?;
        }

        info!("scaffold completed");
        Ok(plan)
    }
}

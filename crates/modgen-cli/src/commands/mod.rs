//! Command handlers.
//!
//! Each submodule translates parsed CLI arguments into core calls and
//! display output; the scaffold pipeline itself lives in `modgen-core`.

pub mod completions;
pub mod library;
pub mod window;

use tracing::{debug, info};

use modgen_adapters::LocalFilesystem;
use modgen_core::{ScaffoldConfig, ScaffoldRequest, Scaffolder};

use crate::{
    cli::ScaffoldArgs,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Shared driver for the scaffolding subcommands.
///
/// 1. Validate the module name
/// 2. Early-exit with the resolved plan if `--dry-run`
/// 3. Execute the scaffold against the local filesystem
/// 4. Report what was created
pub(crate) fn run_scaffold(
    config: &ScaffoldConfig,
    args: &ScaffoldArgs,
    output: &OutputManager,
) -> CliResult<()> {
    let request =
        ScaffoldRequest::new(args.name.as_str()).map_err(|_| CliError::InvalidModuleName {
            name: args.name.clone(),
            reason: "name cannot be empty".into(),
        })?;

    debug!(variant = config.variant, module = %request, "request validated");

    if args.dry_run {
        let plan = config.resolve(&request);
        output.info(&format!(
            "Dry run: would scaffold {} module '{}'",
            config.variant, request
        ))?;
        for dir in &plan.directories {
            output.print(&format!("  mkdir    {}", dir.display()))?;
        }
        for file in &plan.files {
            output.print(&format!("  generate {}", file.output.display()))?;
        }
        return Ok(());
    }

    output.header(&format!(
        "Creating {} module '{}'...",
        config.variant, request
    ))?;
    info!(variant = config.variant, module = %request, "scaffold started");

    let scaffolder = Scaffolder::new(Box::new(LocalFilesystem::new()));
    let plan = scaffolder.scaffold(config, &request)?;

    for file in &plan.files {
        output.print(&format!("  generated {}", file.output.display()))?;
    }
    output.success(&format!("Module '{request}' created!"))?;

    Ok(())
}

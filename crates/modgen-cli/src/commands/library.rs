//! Implementation of the `modgen library` command.

use tracing::instrument;

use modgen_core::variants;

use crate::{cli::ScaffoldArgs, error::CliResult, output::OutputManager};

/// Execute the `modgen library` command.
#[instrument(skip_all, fields(module = %args.name))]
pub fn execute(args: ScaffoldArgs, output: OutputManager) -> CliResult<()> {
    super::run_scaffold(&variants::LIBRARY, &args, &output)
}

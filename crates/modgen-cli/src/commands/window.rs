//! Implementation of the `modgen window` command.

use tracing::instrument;

use modgen_core::variants;

use crate::{cli::WindowArgs, error::CliResult, output::OutputManager};

/// Execute the `modgen window` command.
///
/// `--flat` selects the in-place variant that keeps the older
/// `<name>/include/<name>/` layout; the default nests the header under
/// the shared `windows/` root with the project include namespace.
#[instrument(skip_all, fields(module = %args.scaffold.name, flat = args.flat))]
pub fn execute(args: WindowArgs, output: OutputManager) -> CliResult<()> {
    let config = if args.flat {
        &variants::LOCAL_WINDOW
    } else {
        &variants::WINDOW
    };
    super::run_scaffold(config, &args.scaffold, &output)
}

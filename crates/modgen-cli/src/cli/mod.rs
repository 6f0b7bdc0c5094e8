//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names,
//! aliases, help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "modgen",
    bin_name = "modgen",
    version  = env!("CARGO_PKG_VERSION"),
    about    = "Scaffold new Atelier C++ modules from templates",
    long_about = "Modgen creates new library and window modules for the \
                  Atelier codebase by copying the `*.in` template files, \
                  substituting the placeholder class name, and laying out \
                  the include/src directory tree.",
    after_help = "EXAMPLES:\n\
        \x20 modgen library geometry\n\
        \x20 modgen window settings_dialog\n\
        \x20 modgen window scratch_view --flat\n\
        \x20 modgen completions bash > /usr/share/bash-completion/completions/modgen",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scaffold a new library module under `../../libraries/`.
    #[command(
        visible_alias = "lib",
        about = "Create a new library module",
        after_help = "Run from the directory containing `example_library.in`.\n\
            EXAMPLES:\n\
            \x20 modgen library geometry\n\
            \x20 modgen library orcid_adapter --dry-run"
    )]
    Library(ScaffoldArgs),

    /// Scaffold a new window module under `../../windows/`.
    #[command(
        visible_alias = "win",
        about = "Create a new window module",
        after_help = "Run from the directory containing `example_window.in`.\n\
            EXAMPLES:\n\
            \x20 modgen window settings_dialog\n\
            \x20 modgen window scratch_view --flat"
    )]
    Window(WindowArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 modgen completions bash > ~/.local/share/bash-completion/completions/modgen\n\
            \x20 modgen completions zsh  > ~/.zfunc/_modgen\n\
            \x20 modgen completions fish > ~/.config/fish/completions/modgen.fish"
    )]
    Completions(CompletionsArgs),
}

// ── scaffold arguments ────────────────────────────────────────────────────────

/// Arguments shared by the scaffolding subcommands.
#[derive(Debug, Args)]
pub struct ScaffoldArgs {
    /// Name of the module to create.
    #[arg(value_name = "NAME", help = "New module name, e.g. geometry")]
    pub name: String,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

/// Arguments for `modgen window`.
#[derive(Debug, Args)]
pub struct WindowArgs {
    #[command(flatten)]
    pub scaffold: ScaffoldArgs,

    /// Create the module in the current directory with the flat include
    /// layout (`<name>/include/<name>/`) instead of the shared
    /// `windows/` root.
    #[arg(long = "flat", help = "Scaffold in place with the flat include layout")]
    pub flat: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `modgen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_library_command() {
        let cli = Cli::parse_from(["modgen", "library", "geometry"]);
        if let Commands::Library(args) = cli.command {
            assert_eq!(args.name, "geometry");
            assert!(!args.dry_run);
        } else {
            panic!("expected Library command");
        }
    }

    #[test]
    fn library_alias() {
        let cli = Cli::parse_from(["modgen", "lib", "geometry"]);
        assert!(matches!(cli.command, Commands::Library(_)));
    }

    #[test]
    fn parse_window_flat() {
        let cli = Cli::parse_from(["modgen", "window", "scratch_view", "--flat"]);
        if let Commands::Window(args) = cli.command {
            assert!(args.flat);
            assert_eq!(args.scaffold.name, "scratch_view");
        } else {
            panic!("expected Window command");
        }
    }

    #[test]
    fn missing_name_is_rejected() {
        assert!(Cli::try_parse_from(["modgen", "library"]).is_err());
    }

    #[test]
    fn extra_positional_is_rejected() {
        assert!(Cli::try_parse_from(["modgen", "library", "a", "b"]).is_err());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["modgen", "--quiet", "--verbose", "library", "x"]);
        assert!(result.is_err());
    }
}

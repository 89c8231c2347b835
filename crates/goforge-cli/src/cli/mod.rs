//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "goforge",
    bin_name = "goforge",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f528} Scaffold Go backend projects",
    long_about = "Goforge generates the initial structure of a layered Go \
                  backend service: directories, source files, Docker assets, \
                  and a resolved go.mod.",
    after_help = "EXAMPLES:\n\
        \x20 goforge init my-api\n\
        \x20 goforge init shop --quiet\n\
        \x20 goforge completions bash > /usr/share/bash-completion/completions/goforge",
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
    /// Initialise a new Go backend project.
    #[command(
        visible_alias = "i",
        about = "Initialise a new Go project",
        after_help = "EXAMPLES:\n\
            \x20 goforge init my-api\n\
            \x20 goforge init shop -v\n\n\
        The Go module path is read interactively from stdin."
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 goforge completions bash > ~/.local/share/bash-completion/completions/goforge\n\
            \x20 goforge completions zsh  > ~/.zfunc/_goforge\n\
            \x20 goforge completions fish > ~/.config/fish/completions/goforge.fish"
    )]
    Completions(CompletionsArgs),
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `goforge init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Name of the project directory to create under the current directory.
    #[arg(value_name = "PROJECT_NAME", help = "Project name")]
    pub name: String,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `goforge completions`.
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

//! Command handlers.
//!
//! Each submodule implements one subcommand. Handlers translate CLI
//! arguments into core types, call the scaffold service, and display
//! results. No business logic lives here.

pub mod completions;
pub mod init;

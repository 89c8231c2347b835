//! Infrastructure adapters for Goforge.
//!
//! This crate implements the ports defined in
//! `goforge-core::application::ports`. It contains all external
//! dependencies and I/O operations.

pub mod assets;
pub mod command;
pub mod filesystem;
pub mod renderer;

// Re-export commonly used adapters
pub use assets::{EmbeddedAssets, MemoryAssets};
pub use command::{ProcessCommandRunner, ScriptedCommandRunner};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::SubstitutionRenderer;

//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `goforge-adapters` crate provides implementations.

use crate::domain::{RenderContext, TemplateId};
use crate::error::GoforgeResult;
use std::path::Path;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `goforge_adapters::filesystem::LocalFilesystem` (production)
/// - `goforge_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - Directory creation is idempotent: existing directories are not an error
/// - Permissions are capability-based, not Unix-specific
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> GoforgeResult<()>;

    /// Write content to a file, overwriting if present.
    fn write_file(&self, path: &Path, content: &str) -> GoforgeResult<()>;

    /// Set file permissions.
    fn set_permissions(&self, path: &Path, executable: bool) -> GoforgeResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for bundled template lookup.
///
/// The asset set is read-only process-wide data. A missing identifier is a
/// packaging bug and must abort the whole run.
///
/// Implemented by:
/// - `goforge_adapters::EmbeddedAssets` (templates compiled into the binary)
/// - `goforge_adapters::MemoryAssets` (testing)
pub trait TemplateAssets: Send + Sync {
    /// Fetch the source text of a bundled template.
    fn get(&self, id: &TemplateId) -> GoforgeResult<String>;
}

/// Port for template rendering.
///
/// Implemented by:
/// - `goforge_adapters::SubstitutionRenderer` (strict variable substitution)
pub trait TemplateRenderer: Send + Sync {
    /// Render template source text with the given context.
    ///
    /// Substitutes every known `{{VARIABLE}}` marker verbatim. A marker in
    /// the source that names no context variable is a fatal error: it
    /// indicates a broken bundled template, never user error. Substituted
    /// values are copied untouched, whatever bytes they contain.
    fn render(&self, id: &TemplateId, source: &str, ctx: &RenderContext) -> GoforgeResult<String>;
}

/// Result of an external command invocation.
///
/// stdout and stderr are captured interleaved into a single buffer so a
/// failure diagnostic can show everything the tool printed, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    /// Process exit status (`-1` if terminated by signal).
    pub status: i32,
    /// Combined stdout + stderr.
    pub output: String,
}

impl CommandOutcome {
    pub fn success(&self) -> bool {
        self.status == 0
    }
}

/// Port for running external commands.
///
/// Implemented by:
/// - `goforge_adapters::ProcessCommandRunner` (std::process, production)
/// - `goforge_adapters::ScriptedCommandRunner` (testing)
pub trait CommandRunner: Send + Sync {
    /// Run `program args...` with `cwd` as working directory, blocking until
    /// completion, and capture the combined output.
    ///
    /// # Errors
    ///
    /// Only launch failures (binary missing, spawn error) are errors here;
    /// a non-zero exit is reported through [`CommandOutcome::status`] and
    /// turned into a fatal error by the caller.
    fn run(&self, program: &str, args: &[String], cwd: &Path) -> GoforgeResult<CommandOutcome>;
}

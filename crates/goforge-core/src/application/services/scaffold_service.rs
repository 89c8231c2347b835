//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the entire scaffolding workflow:
//! 1. Create the fixed directory layout (best-effort)
//! 2. Render each manifest entry and write the output (fatal on failure)
//! 3. Run the dependency-resolution command (fatal on non-zero exit)
//!
//! It implements the driving port (incoming) and uses driven ports
//! (outgoing). Control flow is strictly sequential; there is no rollback,
//! so a fatal error leaves the partially created project on disk.

use std::path::PathBuf;

use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{CommandOutcome, CommandRunner, Filesystem, TemplateAssets, TemplateRenderer},
    },
    domain::{FILE_MANIFEST, ProjectSpec, SCAFFOLD_DIRS, manifest},
    error::{GoforgeError, GoforgeResult},
};

/// The external command run after all files are written.
///
/// Defaults to `go mod tidy`, the Go module dependency resolver. The CLI
/// layer may override it from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostStep {
    pub program: String,
    pub args: Vec<String>,
}

impl Default for PostStep {
    fn default() -> Self {
        Self {
            program: "go".into(),
            args: vec!["mod".into(), "tidy".into()],
        }
    }
}

impl PostStep {
    /// Human-readable command line, for diagnostics.
    pub fn display(&self) -> String {
        let mut s = self.program.clone();
        for arg in &self.args {
            s.push(' ');
            s.push_str(arg);
        }
        s
    }
}

/// What a completed scaffold run produced.
///
/// Serializable so the CLI's json output mode can emit it directly.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScaffoldReport {
    /// Directories created under the project root, in table order.
    pub created_dirs: Vec<PathBuf>,
    /// Directories that could not be created (logged, not fatal).
    pub failed_dirs: Vec<PathBuf>,
    /// Files written, in manifest order.
    pub written_files: Vec<PathBuf>,
    /// Combined output of the dependency-resolution command.
    pub post_step_output: String,
}

/// Main scaffolding service.
///
/// Orchestrates directory creation, template rendering, and the post-step
/// command through the injected adapters.
pub struct ScaffoldService {
    assets: Box<dyn TemplateAssets>,
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
    runner: Box<dyn CommandRunner>,
    post_step: PostStep,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    pub fn new(
        assets: Box<dyn TemplateAssets>,
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Box<dyn Filesystem>,
        runner: Box<dyn CommandRunner>,
    ) -> Self {
        Self {
            assets,
            renderer,
            filesystem,
            runner,
            post_step: PostStep::default(),
        }
    }

    /// Override the post-step command (from CLI configuration).
    pub fn with_post_step(mut self, post_step: PostStep) -> Self {
        self.post_step = post_step;
        self
    }

    /// Scaffold a new project.
    ///
    /// This is the main use case: creates the directory layout, renders
    /// the seventeen manifest files, and resolves dependencies.
    #[instrument(
        skip_all,
        fields(
            project = %spec.project_name(),
            module = %spec.module_name(),
        )
    )]
    pub fn scaffold(&self, spec: &ProjectSpec) -> GoforgeResult<ScaffoldReport> {
        info!("Scaffolding Go backend project");

        // The tables are constants; this guards against a broken edit.
        manifest::validate_manifest().map_err(GoforgeError::Domain)?;

        let mut report = ScaffoldReport::default();

        self.create_directories(spec, &mut report)?;
        self.render_files(spec, &mut report)?;
        self.resolve_dependencies(spec, &mut report)?;

        info!(
            dirs = report.created_dirs.len(),
            files = report.written_files.len(),
            "Scaffold completed successfully"
        );
        Ok(report)
    }

    // -------------------------------------------------------------------------
    // Pipeline steps
    // -------------------------------------------------------------------------

    /// Create the project root and the fixed directory set.
    ///
    /// A failure on one directory is logged and skipped; the remaining
    /// directories are still attempted. Rendering later recreates missing
    /// parents, so a skipped directory is not necessarily fatal.
    fn create_directories(
        &self,
        spec: &ProjectSpec,
        report: &mut ScaffoldReport,
    ) -> GoforgeResult<()> {
        let root = spec.root_path();

        // Root creation failure is fatal: nothing below can succeed.
        self.filesystem.create_dir_all(&root)?;

        for dir in SCAFFOLD_DIRS {
            let path = root.join(dir);
            match self.filesystem.create_dir_all(&path) {
                Ok(()) => {
                    info!(path = %path.display(), "Created directory");
                    report.created_dirs.push(path);
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Failed to create directory");
                    report.failed_dirs.push(path);
                }
            }
        }

        Ok(())
    }

    /// Render every manifest entry and write the output file.
    ///
    /// Entries are independent; each output path is written exactly once,
    /// overwriting any existing file. Any load, render, or write failure
    /// aborts the whole run.
    fn render_files(&self, spec: &ProjectSpec, report: &mut ScaffoldReport) -> GoforgeResult<()> {
        let root = spec.root_path();
        let ctx = spec.render_context();

        for entry in FILE_MANIFEST {
            let source = self.assets.get(&entry.template)?;
            let rendered = self.renderer.render(&entry.template, &source, &ctx)?;

            let path = entry.relative_path().under(&root);
            if let Some(parent) = path.parent() {
                self.filesystem.create_dir_all(parent)?;
            }
            self.filesystem.write_file(&path, &rendered)?;

            if entry.permissions().executable_flag() {
                self.filesystem.set_permissions(&path, true)?;
            }

            info!(path = %path.display(), "Generated file");
            report.written_files.push(path);
        }

        Ok(())
    }

    /// Run the dependency-resolution command in the new project directory.
    ///
    /// The one truly fatal step: a non-zero exit aborts the process and the
    /// diagnostic carries the command's combined output.
    fn resolve_dependencies(
        &self,
        spec: &ProjectSpec,
        report: &mut ScaffoldReport,
    ) -> GoforgeResult<()> {
        let root = spec.root_path();
        let command = self.post_step.display();

        info!(command = %command, cwd = %root.display(), "Resolving dependencies");

        let outcome: CommandOutcome =
            self.runner
                .run(&self.post_step.program, &self.post_step.args, &root)?;

        if !outcome.success() {
            return Err(ApplicationError::CommandFailed {
                command,
                status: outcome.status,
                output: outcome.output,
            }
            .into());
        }

        info!(command = %command, "Dependencies resolved");
        report.post_step_output = outcome.output;
        Ok(())
    }
}

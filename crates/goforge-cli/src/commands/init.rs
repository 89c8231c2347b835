//! Implementation of the `goforge init` command.
//!
//! Responsibility: collect the two pieces of user input (project name from
//! the arguments, module path from an interactive prompt), wire up the
//! production adapters, call the core scaffold service, and display results.

use std::io::{BufRead, Write};

use tracing::{debug, info, instrument};

use goforge_adapters::{
    EmbeddedAssets, LocalFilesystem, ProcessCommandRunner, SubstitutionRenderer,
};
use goforge_core::{
    application::{ScaffoldReport, ScaffoldService},
    domain::ProjectSpec,
};

use crate::{
    cli::{InitArgs, OutputFormat, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `goforge init` command.
///
/// Dispatch sequence:
/// 1. Prompt for the Go module path on stdin
/// 2. Build the `ProjectSpec`
/// 3. Wire production adapters into the `ScaffoldService`
/// 4. Scaffold and report progress
/// 5. Print next-steps guidance
#[instrument(skip_all, fields(project = %args.name))]
pub fn execute(
    args: InitArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Interactive module prompt. stdin is read even in quiet mode; the
    //    module path is required input, not decoration.
    let module_name = prompt_module_name()?;

    let spec = ProjectSpec::new(&args.name, &module_name);
    debug!(module = %spec.module_name(), "Project spec built");

    output.header(&format!(
        "Creating project '{}' with module '{}'...",
        spec.project_name(),
        spec.module_name()
    ))?;

    // 2. Wire adapters and scaffold.
    let service = ScaffoldService::new(
        Box::new(EmbeddedAssets::new()),
        Box::new(SubstitutionRenderer::new()),
        Box::new(LocalFilesystem::new()),
        Box::new(ProcessCommandRunner::new()),
    )
    .with_post_step(config.post_step());

    info!(project = %spec.project_name(), "Scaffold started");
    let report = service.scaffold(&spec).map_err(CliError::Core)?;
    info!(project = %spec.project_name(), "Scaffold completed");

    // 3. Report.
    match output.format() {
        OutputFormat::Json => print_json(&spec, &report)?,
        _ => print_human(&spec, &report, &global, &output)?,
    }

    Ok(())
}

// ── Module prompt ─────────────────────────────────────────────────────────────

/// Read the Go module path from stdin.
///
/// The raw line is trimmed of surrounding whitespace and otherwise used
/// verbatim; `go mod tidy` is the authority on whether it is a valid module
/// path. EOF yields an empty module, same as an empty line.
fn prompt_module_name() -> CliResult<String> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    write!(
        stdout,
        "Go module path (e.g. github.com/you/project): "
    )
    .map_err(|e| CliError::IoError {
        message: "failed to write module prompt".into(),
        source: e,
    })?;
    stdout.flush().map_err(|e| CliError::IoError {
        message: "failed to flush stdout".into(),
        source: e,
    })?;

    let mut line = String::new();
    stdin
        .lock()
        .read_line(&mut line)
        .map_err(|e| CliError::IoError {
            message: "failed to read module path".into(),
            source: e,
        })?;

    Ok(line.trim().to_string())
}

// ── Reporting ─────────────────────────────────────────────────────────────────

fn print_human(
    spec: &ProjectSpec,
    report: &ScaffoldReport,
    global: &GlobalArgs,
    output: &OutputManager,
) -> CliResult<()> {
    for dir in &report.created_dirs {
        output.print(&format!("Created: {}", dir.display()))?;
    }
    for dir in &report.failed_dirs {
        output.warning(&format!("Could not create: {}", dir.display()))?;
    }
    for file in &report.written_files {
        output.print(&format!("Generated: {}", file.display()))?;
    }

    output.success(&format!("Project '{}' created!", spec.project_name()))?;

    if !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd {}", spec.project_name()))?;
        output.print("  make run")?;
    }

    Ok(())
}

fn print_json(spec: &ProjectSpec, report: &ScaffoldReport) -> CliResult<()> {
    let payload = serde_json::json!({
        "project": spec,
        "report": report,
    });
    let rendered = serde_json::to_string_pretty(&payload).map_err(|e| {
        CliError::Core(goforge_core::error::GoforgeError::Internal {
            message: format!("failed to serialise report: {e}"),
        })
    })?;
    println!("{rendered}");
    Ok(())
}

//! Integration tests for goforge-core.
//!
//! The service is driven end to end through in-memory adapters, so these
//! tests cover the whole pipeline without touching disk or a Go toolchain.

use std::path::PathBuf;

use goforge_adapters::{
    MemoryAssets, MemoryFilesystem, ScriptedCommandRunner, SubstitutionRenderer,
};
use goforge_core::prelude::*;

fn service_with(
    filesystem: MemoryFilesystem,
    runner: ScriptedCommandRunner,
) -> ScaffoldService {
    ScaffoldService::new(
        Box::new(MemoryAssets::new().with_embedded()),
        Box::new(SubstitutionRenderer::new()),
        Box::new(filesystem),
        Box::new(runner),
    )
}

fn spec() -> ProjectSpec {
    ProjectSpec::new("shop", "github.com/acme/shop")
}

#[test]
fn full_scaffold_creates_all_dirs_and_files() {
    let filesystem = MemoryFilesystem::new();
    let runner = ScriptedCommandRunner::succeeding();
    let service = service_with(filesystem.clone(), runner);

    let report = service.scaffold(&spec()).unwrap();

    assert_eq!(report.created_dirs.len(), SCAFFOLD_DIRS.len());
    assert!(report.failed_dirs.is_empty());
    assert_eq!(report.written_files.len(), FILE_MANIFEST.len());

    let root = PathBuf::from("./shop");
    for dir in SCAFFOLD_DIRS {
        assert!(filesystem.exists(&root.join(dir)), "missing dir {dir}");
    }
    for entry in FILE_MANIFEST {
        let path = entry.relative_path().under(&root);
        assert!(
            filesystem.read_file(&path).is_some(),
            "missing file {}",
            path.display()
        );
    }
}

#[test]
fn module_name_is_substituted_verbatim() {
    let filesystem = MemoryFilesystem::new();
    let service = service_with(filesystem.clone(), ScriptedCommandRunner::succeeding());

    service.scaffold(&spec()).unwrap();

    let go_mod = filesystem
        .read_file(&PathBuf::from("./shop/go.mod"))
        .unwrap();
    assert!(go_mod.contains("module github.com/acme/shop"));

    let main_go = filesystem
        .read_file(&PathBuf::from("./shop/cmd/server/main.go"))
        .unwrap();
    assert!(main_go.contains("\"github.com/acme/shop/config\""));
    assert!(!main_go.contains("{{"));
}

#[test]
fn unusual_module_names_pass_through_unvalidated() {
    let filesystem = MemoryFilesystem::new();
    let service = service_with(filesystem.clone(), ScriptedCommandRunner::succeeding());
    let spec = ProjectSpec::new("odd", "not a valid module!");

    service.scaffold(&spec).unwrap();

    let go_mod = filesystem
        .read_file(&PathBuf::from("./odd/go.mod"))
        .unwrap();
    assert!(go_mod.contains("module not a valid module!"));
}

#[test]
fn module_name_with_brace_markers_is_substituted_verbatim() {
    let filesystem = MemoryFilesystem::new();
    let service = service_with(filesystem.clone(), ScriptedCommandRunner::succeeding());
    let spec = ProjectSpec::new("odd", "example.com/{{ODD}}/mod");

    let report = service.scaffold(&spec).unwrap();
    assert_eq!(report.written_files.len(), FILE_MANIFEST.len());

    let go_mod = filesystem
        .read_file(&PathBuf::from("./odd/go.mod"))
        .unwrap();
    assert!(go_mod.contains("module example.com/{{ODD}}/mod"));
}

#[test]
fn entrypoint_script_is_marked_executable() {
    let filesystem = MemoryFilesystem::new();
    let service = service_with(filesystem.clone(), ScriptedCommandRunner::succeeding());

    service.scaffold(&spec()).unwrap();

    assert!(filesystem.is_executable(&PathBuf::from("./shop/docker-entrypoint.sh")));
    assert!(!filesystem.is_executable(&PathBuf::from("./shop/makefile")));
}

#[test]
fn post_step_runs_inside_project_root() {
    let filesystem = MemoryFilesystem::new();
    let runner = ScriptedCommandRunner::succeeding();
    let service = service_with(filesystem, runner.clone());

    service.scaffold(&spec()).unwrap();

    let calls = runner.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].program, "go");
    assert_eq!(calls[0].args, vec!["mod", "tidy"]);
    assert_eq!(calls[0].cwd, PathBuf::from("./shop"));
}

#[test]
fn post_step_failure_carries_command_output() {
    let filesystem = MemoryFilesystem::new();
    let runner = ScriptedCommandRunner::failing(1, "go: cannot find module\n");
    let service = service_with(filesystem.clone(), runner);

    let err = service.scaffold(&spec()).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("go mod tidy"));
    assert!(message.contains("go: cannot find module"));

    // Files written before the failure remain in place.
    assert!(filesystem
        .read_file(&PathBuf::from("./shop/go.mod"))
        .is_some());
}

#[test]
fn custom_post_step_replaces_default() {
    let filesystem = MemoryFilesystem::new();
    let runner = ScriptedCommandRunner::succeeding();
    let service = service_with(filesystem, runner.clone()).with_post_step(PostStep {
        program: "true".into(),
        args: vec![],
    });

    service.scaffold(&spec()).unwrap();

    let calls = runner.calls();
    assert_eq!(calls[0].program, "true");
    assert!(calls[0].args.is_empty());
}

#[test]
fn missing_template_aborts_before_post_step() {
    let filesystem = MemoryFilesystem::new();
    let runner = ScriptedCommandRunner::succeeding();
    let service = ScaffoldService::new(
        Box::new(MemoryAssets::new()),
        Box::new(SubstitutionRenderer::new()),
        Box::new(filesystem),
        Box::new(runner.clone()),
    );

    assert!(service.scaffold(&spec()).is_err());
    assert!(runner.calls().is_empty());
}

#[test]
fn unresolved_marker_in_bundled_template_is_fatal() {
    let filesystem = MemoryFilesystem::new();
    let runner = ScriptedCommandRunner::succeeding();
    let assets = MemoryAssets::new()
        .with_embedded()
        .with("go.mod", "module {{MODULE}}\nrequire {{DEP}}\n");
    let service = ScaffoldService::new(
        Box::new(assets),
        Box::new(SubstitutionRenderer::new()),
        Box::new(filesystem),
        Box::new(runner.clone()),
    );

    let err = service.scaffold(&spec()).unwrap_err();
    assert!(err.to_string().contains("DEP"));
    assert!(runner.calls().is_empty());
}

#[test]
fn failed_subdirectory_is_reported_but_not_fatal() {
    let filesystem = MemoryFilesystem::new();
    filesystem.deny_dir(&PathBuf::from("./shop/config/db"));
    let runner = ScriptedCommandRunner::succeeding();
    let service = service_with(filesystem.clone(), runner);

    let report = service.scaffold(&spec()).unwrap();

    assert_eq!(report.failed_dirs, vec![PathBuf::from("./shop/config/db")]);
    assert_eq!(report.created_dirs.len(), SCAFFOLD_DIRS.len() - 1);
    assert_eq!(report.written_files.len(), FILE_MANIFEST.len());
}

#[test]
fn scaffold_is_idempotent_over_existing_output() {
    let filesystem = MemoryFilesystem::new();
    let service = service_with(filesystem.clone(), ScriptedCommandRunner::succeeding());

    service.scaffold(&spec()).unwrap();
    filesystem
        .write_file(&PathBuf::from("./shop/go.mod"), "stale content")
        .unwrap();

    let report = service.scaffold(&spec()).unwrap();
    assert_eq!(report.written_files.len(), FILE_MANIFEST.len());

    let go_mod = filesystem
        .read_file(&PathBuf::from("./shop/go.mod"))
        .unwrap();
    assert!(go_mod.contains("module github.com/acme/shop"));
}

//! Integration tests for `goforge init`.
//!
//! The post-step normally runs `go mod tidy`; tests point it at `true` /
//! `false` via the `GOFORGE_GO_BIN` environment variable so no Go
//! toolchain is needed.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn goforge() -> Command {
    let mut cmd = Command::cargo_bin("goforge").unwrap();
    cmd.env_remove("GOFORGE_GO_BIN").env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_flag() {
    goforge()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn version_flag() {
    goforge()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn init_creates_project_layout() {
    let temp = TempDir::new().unwrap();

    goforge()
        .current_dir(temp.path())
        .env("GOFORGE_GO_BIN", "true")
        .args(["init", "shop"])
        .write_stdin("github.com/acme/shop\n")
        .assert()
        .success();

    let root = temp.path().join("shop");
    for dir in [
        "config/db",
        "internal/model",
        "internal/repository",
        "internal/service",
        "internal/api",
        "internal/api/router",
        "internal/api/handler",
        "cmd/server",
    ] {
        assert!(root.join(dir).is_dir(), "missing directory {dir}");
    }

    for file in [
        "go.mod",
        ".env",
        "cmd/server/main.go",
        "config/config.go",
        "config/db/db.go",
        "internal/model/response.go",
        "internal/model/user.go",
        "internal/repository/userRepo.go",
        "internal/service/userService.go",
        "internal/api/handler/userHandler.go",
        "internal/api/router/router.go",
        "internal/api/api.go",
        "docker-entrypoint.sh",
        "Dockerfile",
        "docker-compose.yaml",
        "makefile",
        ".gitignore",
    ] {
        assert!(root.join(file).is_file(), "missing file {file}");
    }
}

#[test]
fn init_substitutes_module_path() {
    let temp = TempDir::new().unwrap();

    goforge()
        .current_dir(temp.path())
        .env("GOFORGE_GO_BIN", "true")
        .args(["init", "shop"])
        .write_stdin("github.com/acme/shop\n")
        .assert()
        .success();

    let go_mod = std::fs::read_to_string(temp.path().join("shop/go.mod")).unwrap();
    assert!(go_mod.contains("module github.com/acme/shop"));

    let main_go = std::fs::read_to_string(temp.path().join("shop/cmd/server/main.go")).unwrap();
    assert!(main_go.contains("github.com/acme/shop/internal/api"));
    assert!(!main_go.contains("{{"));
}

#[test]
#[cfg(unix)]
fn init_marks_entrypoint_executable() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();

    goforge()
        .current_dir(temp.path())
        .env("GOFORGE_GO_BIN", "true")
        .args(["init", "shop"])
        .write_stdin("example.com/shop\n")
        .assert()
        .success();

    let mode = std::fs::metadata(temp.path().join("shop/docker-entrypoint.sh"))
        .unwrap()
        .permissions()
        .mode();
    assert_ne!(mode & 0o111, 0, "entrypoint script should be executable");
}

#[test]
fn init_reports_progress() {
    let temp = TempDir::new().unwrap();

    goforge()
        .current_dir(temp.path())
        .env("GOFORGE_GO_BIN", "true")
        .args(["init", "shop"])
        .write_stdin("example.com/shop\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created:"))
        .stdout(predicate::str::contains("Generated:"))
        .stdout(predicate::str::contains("created!"));
}

#[test]
fn init_quiet_prints_nothing_but_prompt() {
    let temp = TempDir::new().unwrap();

    goforge()
        .current_dir(temp.path())
        .env("GOFORGE_GO_BIN", "true")
        .args(["--quiet", "init", "shop"])
        .write_stdin("example.com/shop\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated:").not());

    assert!(temp.path().join("shop/go.mod").is_file());
}

#[test]
fn init_json_output() {
    let temp = TempDir::new().unwrap();

    goforge()
        .current_dir(temp.path())
        .env("GOFORGE_GO_BIN", "true")
        .args(["--output-format", "json", "init", "shop"])
        .write_stdin("example.com/shop\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"written_files\""))
        .stdout(predicate::str::contains("example.com/shop"));
}

#[test]
fn init_is_idempotent() {
    let temp = TempDir::new().unwrap();

    for _ in 0..2 {
        goforge()
            .current_dir(temp.path())
            .env("GOFORGE_GO_BIN", "true")
            .args(["init", "shop"])
            .write_stdin("example.com/shop\n")
            .assert()
            .success();
    }

    let go_mod = std::fs::read_to_string(temp.path().join("shop/go.mod")).unwrap();
    assert!(go_mod.contains("module example.com/shop"));
}

#[test]
fn empty_module_passes_through() {
    // The module path is deliberately unvalidated; `go mod tidy` decides.
    let temp = TempDir::new().unwrap();

    goforge()
        .current_dir(temp.path())
        .env("GOFORGE_GO_BIN", "true")
        .args(["init", "shop"])
        .write_stdin("\n")
        .assert()
        .success();

    let go_mod = std::fs::read_to_string(temp.path().join("shop/go.mod")).unwrap();
    assert!(go_mod.contains("module \n"));
}

#[test]
fn module_with_braces_passes_through() {
    let temp = TempDir::new().unwrap();

    goforge()
        .current_dir(temp.path())
        .env("GOFORGE_GO_BIN", "true")
        .args(["init", "odd"])
        .write_stdin("example.com/{{ODD}}/mod\n")
        .assert()
        .success();

    let go_mod = std::fs::read_to_string(temp.path().join("odd/go.mod")).unwrap();
    assert!(go_mod.contains("module example.com/{{ODD}}/mod"));
}

#[test]
fn shell_completions() {
    goforge()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("complete"));
}

//! The fixed scaffold tables: directory list and file manifest.
//!
//! Both tables are compile-time constants. They are read-only process-wide
//! data, never derived from user input, and entries are independent of one
//! another: each output path is written exactly once and the only shared
//! input is the module identifier carried by the render context.

use std::fmt;

use super::common::{Permissions, RelativePath};
use super::error::DomainError;

/// Identifier for a bundled template asset.
///
/// Resolution is left to the `TemplateAssets` port implementation (the
/// embedded table in goforge-adapters). A missing identifier is a packaging
/// bug, not user error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TemplateId(pub &'static str);

impl TemplateId {
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// One row of the file manifest: output path → template identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileManifestEntry {
    /// Output path relative to the project root (e.g. "cmd/server/main.go").
    pub output: &'static str,

    /// The bundled template this output is rendered from.
    pub template: TemplateId,

    /// Whether the written file carries the executable capability.
    pub executable: bool,
}

impl FileManifestEntry {
    const fn file(output: &'static str, template: &'static str) -> Self {
        Self {
            output,
            template: TemplateId(template),
            executable: false,
        }
    }

    const fn script(output: &'static str, template: &'static str) -> Self {
        Self {
            output,
            template: TemplateId(template),
            executable: true,
        }
    }

    /// Output path as a guarded relative path.
    pub fn relative_path(&self) -> RelativePath {
        RelativePath::new(self.output)
    }

    /// Capability set for the written file.
    pub fn permissions(&self) -> Permissions {
        if self.executable {
            Permissions::executable()
        } else {
            Permissions::read_write()
        }
    }
}

/// The eight subdirectories created under every new project root.
///
/// Creation order matches this table; each is created with parents as
/// needed and already-existing directories are not an error.
pub const SCAFFOLD_DIRS: &[&str] = &[
    "config/db",
    "internal/model",
    "internal/repository",
    "internal/service",
    "internal/api",
    "internal/api/router",
    "internal/api/handler",
    "cmd/server",
];

/// The seventeen rendered files of a layered Go backend skeleton.
pub const FILE_MANIFEST: &[FileManifestEntry] = &[
    FileManifestEntry::file("go.mod", "go.mod"),
    FileManifestEntry::file(".env", "env"),
    FileManifestEntry::file("cmd/server/main.go", "cmd/server/main.go"),
    FileManifestEntry::file("config/config.go", "config/config.go"),
    FileManifestEntry::file("config/db/db.go", "config/db/db.go"),
    FileManifestEntry::file("internal/model/response.go", "internal/model/response.go"),
    FileManifestEntry::file("internal/model/user.go", "internal/model/user.go"),
    FileManifestEntry::file(
        "internal/repository/userRepo.go",
        "internal/repository/userRepo.go",
    ),
    FileManifestEntry::file(
        "internal/service/userService.go",
        "internal/service/userService.go",
    ),
    FileManifestEntry::file(
        "internal/api/handler/userHandler.go",
        "internal/api/handler/userHandler.go",
    ),
    FileManifestEntry::file("internal/api/router/router.go", "internal/api/router/router.go"),
    FileManifestEntry::file("internal/api/api.go", "internal/api/api.go"),
    FileManifestEntry::script("docker-entrypoint.sh", "docker-entrypoint.sh"),
    FileManifestEntry::file("Dockerfile", "Dockerfile"),
    FileManifestEntry::file("docker-compose.yaml", "docker-compose.yaml"),
    FileManifestEntry::file("makefile", "makefile"),
    FileManifestEntry::file(".gitignore", "gitignore"),
];

/// Validate the manifest invariants: unique, relative output paths.
///
/// The tables are constants, so this can only fail after an incorrect
/// edit to this file; it runs once at scaffold start as a cheap guard.
pub fn validate_manifest() -> Result<(), DomainError> {
    let mut seen = std::collections::HashSet::new();
    for entry in FILE_MANIFEST {
        if std::path::Path::new(entry.output).is_absolute() {
            return Err(DomainError::AbsolutePathNotAllowed {
                path: entry.output.into(),
            });
        }
        if !seen.insert(entry.output) {
            return Err(DomainError::DuplicatePath {
                path: entry.output.into(),
            });
        }
    }
    for dir in SCAFFOLD_DIRS {
        if std::path::Path::new(dir).is_absolute() {
            return Err(DomainError::AbsolutePathNotAllowed { path: (*dir).into() });
        }
    }
    Ok(())
}

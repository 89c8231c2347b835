//! Bundled template assets.
//!
//! The template set ships inside the binary: every `.tmpl` file under this
//! crate's `templates/` directory is embedded at compile time with
//! `include_str!` and exposed through a constant lookup table. Nothing is
//! installed next to the binary and nothing can go missing at runtime
//! short of a packaging bug.

use std::collections::HashMap;

use goforge_core::{
    application::ports::TemplateAssets,
    domain::{DomainError, TemplateId},
    error::GoforgeResult,
};

/// The embedded template table: template identifier → source text.
///
/// Identifiers match the `TemplateId` constants in the core file manifest.
const EMBEDDED: &[(&str, &str)] = &[
    ("go.mod", include_str!("../templates/go.mod.tmpl")),
    ("env", include_str!("../templates/env.tmpl")),
    (
        "cmd/server/main.go",
        include_str!("../templates/cmd_server_main.go.tmpl"),
    ),
    (
        "config/config.go",
        include_str!("../templates/config_config.go.tmpl"),
    ),
    (
        "config/db/db.go",
        include_str!("../templates/config_db_db.go.tmpl"),
    ),
    (
        "internal/model/response.go",
        include_str!("../templates/internal_model_response.go.tmpl"),
    ),
    (
        "internal/model/user.go",
        include_str!("../templates/internal_model_user.go.tmpl"),
    ),
    (
        "internal/repository/userRepo.go",
        include_str!("../templates/internal_repository_userRepo.go.tmpl"),
    ),
    (
        "internal/service/userService.go",
        include_str!("../templates/internal_service_userService.go.tmpl"),
    ),
    (
        "internal/api/handler/userHandler.go",
        include_str!("../templates/internal_api_handler_userHandler.go.tmpl"),
    ),
    (
        "internal/api/router/router.go",
        include_str!("../templates/internal_api_router_router.go.tmpl"),
    ),
    (
        "internal/api/api.go",
        include_str!("../templates/internal_api_api.go.tmpl"),
    ),
    (
        "docker-entrypoint.sh",
        include_str!("../templates/docker-entrypoint.sh.tmpl"),
    ),
    ("Dockerfile", include_str!("../templates/Dockerfile.tmpl")),
    (
        "docker-compose.yaml",
        include_str!("../templates/docker-compose.yaml.tmpl"),
    ),
    ("makefile", include_str!("../templates/makefile.tmpl")),
    ("gitignore", include_str!("../templates/gitignore.tmpl")),
];

/// Production asset source backed by the embedded table.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedAssets;

impl EmbeddedAssets {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateAssets for EmbeddedAssets {
    fn get(&self, id: &TemplateId) -> GoforgeResult<String> {
        EMBEDDED
            .iter()
            .find(|(name, _)| *name == id.as_str())
            .map(|(_, source)| (*source).to_string())
            .ok_or_else(|| {
                DomainError::TemplateNotFound {
                    template: id.to_string(),
                }
                .into()
            })
    }
}

/// In-memory asset source for testing.
#[derive(Debug, Clone, Default)]
pub struct MemoryAssets {
    assets: HashMap<String, String>,
}

impl MemoryAssets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a template, replacing any previous source for the same id.
    pub fn with(mut self, id: &str, source: impl Into<String>) -> Self {
        self.assets.insert(id.to_string(), source.into());
        self
    }

    /// Seed every template of the embedded table, so core tests can run the
    /// real manifest without touching `include_str!` internals directly.
    pub fn with_embedded(mut self) -> Self {
        for (name, source) in EMBEDDED {
            self.assets.insert((*name).to_string(), (*source).to_string());
        }
        self
    }
}

impl TemplateAssets for MemoryAssets {
    fn get(&self, id: &TemplateId) -> GoforgeResult<String> {
        self.assets.get(id.as_str()).cloned().ok_or_else(|| {
            DomainError::TemplateNotFound {
                template: id.to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use goforge_core::domain::FILE_MANIFEST;

    #[test]
    fn embedded_table_covers_the_whole_manifest() {
        let assets = EmbeddedAssets::new();
        for entry in FILE_MANIFEST {
            let source = assets.get(&entry.template);
            assert!(source.is_ok(), "missing embedded template: {}", entry.template);
            assert!(
                !source.unwrap().is_empty(),
                "empty embedded template: {}",
                entry.template
            );
        }
    }

    #[test]
    fn embedded_go_mod_declares_module_marker() {
        let source = EmbeddedAssets::new().get(&TemplateId("go.mod")).unwrap();
        assert!(source.contains("module {{MODULE}}"));
    }

    #[test]
    fn unknown_id_is_not_found() {
        let err = EmbeddedAssets::new().get(&TemplateId("nope")).unwrap_err();
        assert!(err.to_string().contains("nope"));
    }

    #[test]
    fn memory_assets_roundtrip() {
        let assets = MemoryAssets::new().with("t", "hello {{MODULE}}");
        assert_eq!(
            assets.get(&TemplateId("t")).unwrap(),
            "hello {{MODULE}}".to_string()
        );
    }
}

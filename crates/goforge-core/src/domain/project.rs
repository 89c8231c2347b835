//! Project specification and render context.
//!
//! The whole tool consumes exactly two pieces of user data: the project
//! name (positional argument) and the Go module identifier (interactive
//! prompt). Both are captured once into [`ProjectSpec`] and never mutated.

use std::collections::HashMap;
use std::path::PathBuf;

use serde::Serialize;

/// The two user inputs, captured once at start and immutable afterward.
///
/// Used only to compute output paths and as the substitution source for
/// the render context. The module identifier is accepted verbatim; empty
/// strings and syntactically odd identifiers pass through unchanged, and
/// `go mod tidy` is the authority on validity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectSpec {
    project_name: String,
    module_name: String,
}

impl ProjectSpec {
    pub fn new(project_name: impl Into<String>, module_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            module_name: module_name.into(),
        }
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn module_name(&self) -> &str {
        &self.module_name
    }

    /// Project root: `./<projectName>` relative to the working directory.
    pub fn root_path(&self) -> PathBuf {
        PathBuf::from(".").join(&self.project_name)
    }

    /// Build the render context carrying the substitution variables.
    pub fn render_context(&self) -> RenderContext {
        RenderContext::new(&self.module_name)
    }
}

/// Context for template rendering.
///
/// A **Value Object** containing the data needed to render a parameterized
/// template. Immutable after creation.
///
/// ## Variables
///
/// | Variable | Example | Source |
/// |----------|---------|--------|
/// | `MODULE` | "github.com/me/myapp" | Interactive prompt |
///
/// The templates recognize exactly one substitution marker, `{{MODULE}}`.
/// Substitution is verbatim: no escaping, no transformation.
#[derive(Debug, Clone)]
pub struct RenderContext {
    variables: HashMap<String, String>,
}

impl RenderContext {
    pub fn new(module: impl Into<String>) -> Self {
        let mut variables = HashMap::new();
        // The contract between goforge and its templates: any template using
        // {{MODULE}} can expect this to exist.
        variables.insert("MODULE".to_string(), module.into());
        Self { variables }
    }

    /// Get a variable value if it exists.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(|s| s.as_str())
    }
}

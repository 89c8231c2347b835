//! Marker substitution renderer.

use goforge_core::{
    application::ports::TemplateRenderer,
    domain::{DomainError, RenderContext, TemplateId},
    error::GoforgeResult,
};
use tracing::instrument;

/// Renderer that substitutes `{{NAME}}` markers with context variables.
///
/// Rendering is strict on the bundled source: every marker must name a
/// known context variable. Substituted values themselves are copied byte
/// for byte and never rescanned, so brace sequences inside user input
/// pass through unchanged.
pub struct SubstitutionRenderer;

impl SubstitutionRenderer {
    /// Create a new substitution renderer.
    pub fn new() -> Self {
        Self
    }
}

impl Default for SubstitutionRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for SubstitutionRenderer {
    #[instrument(skip_all, fields(template = %id))]
    fn render(
        &self,
        id: &TemplateId,
        source: &str,
        context: &RenderContext,
    ) -> GoforgeResult<String> {
        let mut rendered = String::with_capacity(source.len());
        let mut rest = source;
        while let Some(start) = rest.find("{{") {
            rendered.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            let Some(end) = after.find("}}") else {
                return Err(DomainError::MalformedTemplate {
                    template: id.as_str().to_string(),
                    reason: "unterminated '{{' marker".to_string(),
                }
                .into());
            };
            let raw = &after[..end];
            let name = raw.trim();
            if let Some(value) = context.get(name) {
                rendered.push_str(value);
            } else if is_marker_name(name) {
                return Err(DomainError::UnresolvedMarker {
                    template: id.as_str().to_string(),
                    marker: name.to_string(),
                }
                .into());
            } else {
                // Not a marker, keep the braces as literal text.
                rendered.push_str("{{");
                rendered.push_str(raw);
                rendered.push_str("}}");
            }
            rest = &after[end + 2..];
        }
        rendered.push_str(rest);
        Ok(rendered)
    }
}

fn is_marker_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}

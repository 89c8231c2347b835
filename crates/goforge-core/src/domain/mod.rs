//! Core domain layer for Goforge.
//!
//! This module contains pure business logic with ZERO external dependencies.
//! All I/O, templating, and process concerns are handled via ports (traits)
//! defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror + serde derives
//! - **Immutable entities**: All domain objects are Clone + PartialEq
//! - **Read-only tables**: The directory list and file manifest are
//!   compile-time constants, never mutable process state

// Public API - what the world sees
pub mod common;
pub mod error;
pub mod manifest;
pub mod project;

// Re-exports for convenience
pub use common::{Permissions, RelativePath};
pub use error::{DomainError, ErrorCategory};
pub use manifest::{FILE_MANIFEST, FileManifestEntry, SCAFFOLD_DIRS, TemplateId};
pub use project::{ProjectSpec, RenderContext};

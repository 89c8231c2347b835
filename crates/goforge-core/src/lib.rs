//! Goforge Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Goforge
//! backend scaffolding tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          goforge-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (ScaffoldService)            │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Assets, Renderer, Filesystem, Runner)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     goforge-adapters (Infrastructure)   │
//! │ (EmbeddedAssets, LocalFilesystem, etc)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (ProjectSpec, FileManifest, Context)   │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use goforge_core::{
//!     application::ScaffoldService,
//!     domain::ProjectSpec,
//! };
//!
//! // 1. Capture the two pieces of user input
//! let spec = ProjectSpec::new("myapp", "github.com/me/myapp");
//!
//! // 2. Use application service (with injected adapters)
//! let service = ScaffoldService::new(assets, renderer, filesystem, runner);
//! let report = service.scaffold(&spec).unwrap();
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        PostStep, ScaffoldReport, ScaffoldService,
        ports::{CommandOutcome, CommandRunner, Filesystem, TemplateAssets, TemplateRenderer},
    };
    pub use crate::domain::{
        FILE_MANIFEST, FileManifestEntry, ProjectSpec, RenderContext, SCAFFOLD_DIRS, TemplateId,
    };
    pub use crate::error::{GoforgeError, GoforgeResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `goforge-adapters` implement
//! these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by
//!   infrastructure
//!   - `Filesystem`: File operations
//!   - `TemplateAssets`: Bundled template lookup
//!   - `TemplateRenderer`: Template rendering
//!   - `CommandRunner`: External process invocation
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by
//!   application (defined in the CLI layer, implemented by services)

pub mod output;

pub use output::{CommandOutcome, CommandRunner, Filesystem, TemplateAssets, TemplateRenderer};

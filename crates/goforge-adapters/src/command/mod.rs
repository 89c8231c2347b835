//! Command runner adapters.

mod process;
mod scripted;

pub use process::ProcessCommandRunner;
pub use scripted::{RecordedCall, ScriptedCommandRunner};

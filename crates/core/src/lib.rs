//! lazy-core - locate, compile and run source files kept in per-extension
//! project directories
//!
//! This crate provides functionality to:
//! - Parse extension tokens from file names
//! - Resolve `<home>/Documents/<ext>_projects` style project directories and search them
//! - Detect compiled artifacts, start the right toolchain, and wait for its output
//! - Execute the artifact with the terminal's streams attached
pub mod build;
pub mod command;
pub mod config;
pub mod error;
pub mod parser;
pub mod project;
pub mod runner;
pub mod types;

// Re-export commonly used types and traits
pub use error::{Error, InputProblem, Result};
pub use types::*;

// Re-export main API components
pub use build::{ArtifactTracker, CancelToken, Toolchains, WaitPolicy};
pub use command::{CommandKind, ToolCommand};
pub use config::Config;
pub use project::{CreateOutcome, FileLocator, ProjectCreator, ProjectPathResolver};
pub use runner::{BuildRunner, BuildState, RunPlan, RunReport};

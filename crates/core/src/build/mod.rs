//! Compilation support: artifact detection, toolchain selection and the
//! bounded wait for a compiler's output.

pub mod artifact;
pub mod toolchain;
pub mod wait;

pub use artifact::ArtifactTracker;
pub use toolchain::Toolchains;
pub use wait::{CancelToken, WaitPolicy};

//! Per-extension project directories: where they live, how to search them,
//! and how new files are added to them.

pub mod creator;
pub mod locator;
pub mod resolver;

pub use creator::{CreateOutcome, ProjectCreator};
pub use locator::FileLocator;
pub use resolver::ProjectPathResolver;

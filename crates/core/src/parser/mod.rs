//! File name parsing

pub mod extension;

// Re-export commonly used items
pub use extension::{extension, extension_index, has_extension, stem};

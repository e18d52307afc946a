//! External process description and execution

pub mod tool_command;

// Re-export commonly used types
pub use tool_command::{CommandKind, ToolCommand};

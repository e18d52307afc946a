use serde::{Deserialize, Serialize};

/// Compile command for one extension token.
///
/// `{source}` in `args` expands to the source path relative to the project
/// root and `{output}` to the artifact file name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ToolchainConfig {
    pub command: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl ToolchainConfig {
    pub fn new(command: impl Into<String>, args: &[&str]) -> Self {
        Self {
            command: command.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }
}

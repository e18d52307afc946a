use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;
use std::time::Duration;

/// Errors that can occur while locating, compiling, or running a source file
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid input: {0}")]
    InvalidInput(InputProblem),

    #[error("Couldn't find source file {0}")]
    NotFound(String),

    #[error("Could not determine the home directory")]
    HomeDirectoryUnavailable,

    #[error("IO error: {0}")]
    Filesystem(#[from] io::Error),

    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("No toolchain configured for .{0} files")]
    NoToolchain(String),

    #[error("Failed to start compiler `{command}`: {source}")]
    CompileInvocation {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("Compiler `{command}` exited with {status}, expected output {}", .artifact.display())]
    CompileFailed {
        command: String,
        status: ExitStatus,
        artifact: PathBuf,
    },

    #[error("Timed out after {elapsed:?} waiting for {}", .artifact.display())]
    CompileTimeout { artifact: PathBuf, elapsed: Duration },

    #[error("Cancelled while waiting for {}", .0.display())]
    Cancelled(PathBuf),

    #[error("Failed to execute {}: {reason}", .artifact.display())]
    Execution { artifact: PathBuf, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Why a file argument was rejected before any filesystem work
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputProblem {
    EmptyArgument,
    MissingExtension,
    /// The argument carries directory components (`sub/main.go`, `../x.c`)
    NotAFileName,
}

impl std::fmt::Display for InputProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputProblem::EmptyArgument => write!(f, "no file was given"),
            InputProblem::MissingExtension => write!(f, "the file must have an extension"),
            InputProblem::NotAFileName => write!(f, "the file must be a bare file name"),
        }
    }
}

impl Error {
    /// Conditions reported to the user without failing the command
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::InvalidInput(_) | Error::NotFound(_))
    }

    /// Message shown for recoverable conditions. `example` is the sample
    /// invocation printed alongside a missing-extension complaint.
    pub fn user_message(&self, example: &str) -> String {
        match self {
            Error::InvalidInput(InputProblem::EmptyArgument) => {
                "No file was given. Exiting.".to_string()
            }
            Error::InvalidInput(InputProblem::MissingExtension) => {
                format!("The file must have an extension. Example: {example}")
            }
            Error::InvalidInput(InputProblem::NotAFileName) => {
                format!("The file must be a bare file name, without directories. Example: {example}")
            }
            Error::NotFound(name) => {
                format!("Couldn't find source file {name}. Please try again.")
            }
            other => other.to_string(),
        }
    }
}

/// Result type alias for lazy operations
pub type Result<T> = std::result::Result<T, Error>;

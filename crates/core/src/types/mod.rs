use std::ffi::OsStr;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{Error, InputProblem, Result};
use crate::parser;

/// A file name given on the command line, split into its extension token
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceFile {
    name: String,
    extension: String,
}

impl SourceFile {
    /// Validate a bare file name. Empty names, names with directory
    /// components and names without an extension token are rejected as
    /// invalid input.
    pub fn parse(name: &str) -> Result<Self> {
        if name.is_empty() {
            return Err(Error::InvalidInput(InputProblem::EmptyArgument));
        }

        if Path::new(name).file_name() != Some(OsStr::new(name)) {
            return Err(Error::InvalidInput(InputProblem::NotAFileName));
        }

        let extension = parser::extension(name)
            .ok_or(Error::InvalidInput(InputProblem::MissingExtension))?;

        Ok(Self {
            name: name.to_string(),
            extension: extension.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Name with the extension stripped. Hidden files with nothing before
    /// the dot fall back to the extension token.
    pub fn stem(&self) -> &str {
        let stem = parser::stem(&self.name);
        if stem.is_empty() { &self.extension } else { stem }
    }
}

impl fmt::Display for SourceFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Host flavour deciding the project directory layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HostOs {
    Unix,
    Windows,
}

impl HostOs {
    pub fn current() -> Self {
        if cfg!(windows) {
            HostOs::Windows
        } else {
            HostOs::Unix
        }
    }

    pub fn separator(self) -> char {
        match self {
            HostOs::Unix => '/',
            HostOs::Windows => '\\',
        }
    }
}

/// Canonical folder holding every file of one extension
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectDirectory {
    pub extension: String,
    pub path: PathBuf,
}

impl ProjectDirectory {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Where a searched file was found
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Located {
    pub file_path: PathBuf,
    /// The project directory the search started from, not the file's parent
    pub root_path: PathBuf,
}

impl Located {
    /// File path relative to the project root, used as the compiler input
    pub fn relative_path(&self) -> &Path {
        self.file_path
            .strip_prefix(&self.root_path)
            .unwrap_or(&self.file_path)
    }
}

/// Expected compiler output for a source file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompiledArtifact {
    pub source_name: String,
    pub output_name: String,
    pub output_path: PathBuf,
}

impl CompiledArtifact {
    /// File name of the artifact inside the project root (`<output_name>.o`)
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.output_name, ARTIFACT_SUFFIX)
    }
}

pub const ARTIFACT_SUFFIX: &str = "o";

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::trace;

use crate::{
    error::Result,
    types::{CompiledArtifact, SourceFile},
};

/// Knows where compiled output for a project root lands
#[derive(Debug, Clone)]
pub struct ArtifactTracker {
    root: PathBuf,
}

impl ArtifactTracker {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Output name for a source file: the name with its extension stripped
    pub fn output_name(source: &SourceFile) -> String {
        source.stem().to_string()
    }

    pub fn artifact(&self, source: &SourceFile) -> CompiledArtifact {
        let mut artifact = CompiledArtifact {
            source_name: source.name().to_string(),
            output_name: Self::output_name(source),
            output_path: PathBuf::new(),
        };
        artifact.output_path = self.root.join(artifact.file_name());
        artifact
    }

    /// Whether the artifact for `source` already exists under the root.
    /// Only a missing file counts as "not compiled"; other stat failures
    /// are surfaced.
    pub fn is_compiled(&self, source: &SourceFile) -> Result<(bool, CompiledArtifact)> {
        let artifact = self.artifact(source);
        let exists = artifact_exists(&artifact.output_path)?;
        trace!("Artifact {:?} exists: {}", artifact.output_path, exists);
        Ok((exists, artifact))
    }
}

pub(crate) fn artifact_exists(path: &Path) -> io::Result<bool> {
    match fs::metadata(path) {
        Ok(_) => Ok(true),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_output_name_strips_extension() {
        let name = |n: &str| ArtifactTracker::output_name(&SourceFile::parse(n).unwrap());
        assert_eq!(name("main.go"), "main");
        assert_eq!(name("archive.tar.gz"), "archive.tar");
        assert_eq!(name(".hidden"), "hidden");
    }

    #[test]
    fn test_artifact_path_is_under_root() {
        let tracker = ArtifactTracker::new("/projects/c_projects");
        let artifact = tracker.artifact(&SourceFile::parse("hello.c").unwrap());
        assert_eq!(artifact.source_name, "hello.c");
        assert_eq!(artifact.output_name, "hello");
        assert_eq!(artifact.file_name(), "hello.o");
        assert_eq!(artifact.output_path, PathBuf::from("/projects/c_projects/hello.o"));
    }

    #[test]
    fn test_is_compiled_tracks_the_file() {
        let temp = TempDir::new().unwrap();
        let tracker = ArtifactTracker::new(temp.path());
        let source = SourceFile::parse("main.go").unwrap();

        let (compiled, artifact) = tracker.is_compiled(&source).unwrap();
        assert!(!compiled);

        fs::write(&artifact.output_path, b"").unwrap();
        let (compiled, _) = tracker.is_compiled(&source).unwrap();
        assert!(compiled);

        fs::remove_file(&artifact.output_path).unwrap();
        let (compiled, _) = tracker.is_compiled(&source).unwrap();
        assert!(!compiled);
    }
}

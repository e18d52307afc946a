//! Adding new files to project directories

use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;

use tracing::{debug, info};

use super::ProjectPathResolver;
use crate::{error::Result, types::SourceFile};

/// Result of a create request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    Created(PathBuf),
    AlreadyExists(PathBuf),
}

/// Creates empty source files in their project directory, creating the
/// directory on first use.
pub struct ProjectCreator<'a> {
    resolver: &'a ProjectPathResolver,
}

impl<'a> ProjectCreator<'a> {
    pub fn new(resolver: &'a ProjectPathResolver) -> Self {
        Self { resolver }
    }

    /// Create `file` at the top of its project directory. Existing files
    /// are left untouched.
    pub fn create(&self, file: &SourceFile) -> Result<CreateOutcome> {
        let dir = self.resolver.resolve(file);
        if !dir.path.is_dir() {
            info!("Creating project directory {:?}", dir.path);
            fs::create_dir_all(&dir.path)?;
        }

        let path = dir.path.join(file.name());
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(_) => {
                debug!("Created {:?}", path);
                Ok(CreateOutcome::Created(path))
            }
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
                Ok(CreateOutcome::AlreadyExists(path))
            }
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::HostOs;
    use tempfile::TempDir;

    #[test]
    fn test_creates_directory_and_empty_file() {
        let home = TempDir::new().unwrap();
        let resolver = ProjectPathResolver::new(home.path(), HostOs::Unix);
        let creator = ProjectCreator::new(&resolver);

        let outcome = creator.create(&SourceFile::parse("hello.c").unwrap()).unwrap();
        let expected = home.path().join("Documents").join("c_projects").join("hello.c");
        assert_eq!(outcome, CreateOutcome::Created(expected.clone()));
        assert_eq!(fs::read(&expected).unwrap().len(), 0);
    }

    #[test]
    fn test_existing_file_is_not_truncated() {
        let home = TempDir::new().unwrap();
        let resolver = ProjectPathResolver::new(home.path(), HostOs::Unix);
        let creator = ProjectCreator::new(&resolver);
        let file = SourceFile::parse("keep.py").unwrap();

        let CreateOutcome::Created(path) = creator.create(&file).unwrap() else {
            panic!("first create should create the file");
        };
        fs::write(&path, "print('hi')").unwrap();

        assert_eq!(
            creator.create(&file).unwrap(),
            CreateOutcome::AlreadyExists(path.clone())
        );
        assert_eq!(fs::read_to_string(&path).unwrap(), "print('hi')");
    }
}

//! Recursive lookup of a source file inside its project directory

use std::io;
use std::path::Path;

use tracing::{debug, trace};
use walkdir::WalkDir;

use super::ProjectPathResolver;
use crate::{
    error::Result,
    types::{Located, SourceFile},
};

/// Finds source files under the project directory of their extension
pub struct FileLocator<'a> {
    resolver: &'a ProjectPathResolver,
}

impl<'a> FileLocator<'a> {
    pub fn new(resolver: &'a ProjectPathResolver) -> Self {
        Self { resolver }
    }

    /// Search the project directory of `file` for an entry with the same
    /// base name. A missing project directory is a plain miss.
    pub fn search(&self, file: &SourceFile) -> Result<Option<Located>> {
        let root = self.resolver.resolve(file).path;
        debug!("Searching for {} under {:?}", file, root);
        search_root(&root, file.name())
    }
}

/// Depth-first walk of `root` in file name order, returning the first
/// regular file whose name equals `name` exactly.
pub fn search_root(root: &Path, name: &str) -> Result<Option<Located>> {
    if !root.is_dir() {
        debug!("Project directory {:?} does not exist", root);
        return Ok(None);
    }

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if is_not_found(&err) => {
                trace!("Entry vanished during walk: {}", err);
                continue;
            }
            Err(err) => return Err(err.into()),
        };

        if entry.file_type().is_file() && entry.file_name().to_str() == Some(name) {
            debug!("Found {:?}", entry.path());
            return Ok(Some(Located {
                file_path: entry.into_path(),
                root_path: root.to_path_buf(),
            }));
        }
    }

    Ok(None)
}

fn is_not_found(err: &walkdir::Error) -> bool {
    err.io_error()
        .is_some_and(|e| e.kind() == io::ErrorKind::NotFound)
}

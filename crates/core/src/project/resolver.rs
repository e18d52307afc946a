//! Maps an extension token to its project directory under the home directory

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::{
    config::Config,
    error::{Error, Result},
    types::{HostOs, ProjectDirectory, SourceFile},
};

const PROJECTS_SUFFIX: &str = "_projects";
const DOCUMENTS: &str = "Documents";

/// Resolves project directories.
///
/// Pure over `(file name, host, home)`: nothing is touched on disk.
#[derive(Debug, Clone)]
pub struct ProjectPathResolver {
    home: PathBuf,
    host: HostOs,
}

impl ProjectPathResolver {
    pub fn new(home: impl Into<PathBuf>, host: HostOs) -> Self {
        Self {
            home: home.into(),
            host,
        }
    }

    /// Resolver for the current user and host
    pub fn from_env() -> Result<Self> {
        let home = dirs::home_dir().ok_or(Error::HomeDirectoryUnavailable)?;
        Ok(Self::new(home, HostOs::current()))
    }

    /// Resolver rooted at the configured `projects_home`, or the user's home
    pub fn from_config(config: &Config) -> Result<Self> {
        match config.projects_home {
            Some(ref home) => Ok(Self::new(home, HostOs::current())),
            None => Self::from_env(),
        }
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    pub fn host(&self) -> HostOs {
        self.host
    }

    /// Project directory for the extension of `file`.
    ///
    /// Unix hosts use `<home>/Documents/<ext>_projects/`, Windows hosts
    /// `<home>\<ext>_projects\`.
    pub fn resolve(&self, file: &SourceFile) -> ProjectDirectory {
        let sep = self.host.separator();
        let dir_name = format!("{}{}", file.extension(), PROJECTS_SUFFIX);

        // Home is kept as raw OS bytes; only a UTF-8 home gets its trailing
        // separators trimmed.
        let mut path = match self.home.to_str() {
            Some(home) => OsString::from(home.trim_end_matches(['/', '\\'])),
            None => self.home.clone().into_os_string(),
        };

        let tail = match self.host {
            HostOs::Unix => format!("{sep}{DOCUMENTS}{sep}{dir_name}{sep}"),
            HostOs::Windows => format!("{sep}{dir_name}{sep}"),
        };
        path.push(tail);

        ProjectDirectory {
            extension: file.extension().to_string(),
            path: PathBuf::from(path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(name: &str) -> SourceFile {
        SourceFile::parse(name).unwrap()
    }

    #[test]
    fn test_unix_layout() {
        let resolver = ProjectPathResolver::new("/home/ben", HostOs::Unix);
        let dir = resolver.resolve(&source("main.go"));
        assert_eq!(dir.extension, "go");
        assert_eq!(dir.path, PathBuf::from("/home/ben/Documents/go_projects/"));
    }

    #[test]
    fn test_windows_layout() {
        let resolver = ProjectPathResolver::new("C:\\Users\\ben", HostOs::Windows);
        let dir = resolver.resolve(&source("main.c"));
        assert_eq!(dir.path.to_string_lossy(), "C:\\Users\\ben\\c_projects\\");
    }

    #[test]
    fn test_layouts_differ_only_by_documents_and_separator() {
        let unix = ProjectPathResolver::new("home", HostOs::Unix)
            .resolve(&source("a.rs"))
            .path
            .to_string_lossy()
            .into_owned();
        let windows = ProjectPathResolver::new("home", HostOs::Windows)
            .resolve(&source("a.rs"))
            .path
            .to_string_lossy()
            .into_owned();

        assert_eq!(unix.replace("/Documents", "").replace('/', "\\"), windows);
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let resolver = ProjectPathResolver::new("/home/ben", HostOs::Unix);
        let first = resolver.resolve(&source("archive.tar.gz"));
        let second = resolver.resolve(&source("archive.tar.gz"));
        assert_eq!(first, second);
        assert_eq!(first.extension, "gz");
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_home_is_preserved() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let home = Path::new(OsStr::from_bytes(b"/home/b\xffn"));
        let dir = ProjectPathResolver::new(home, HostOs::Unix).resolve(&source("main.c"));
        assert_eq!(
            dir.path.as_os_str().as_bytes(),
            b"/home/b\xffn/Documents/c_projects/"
        );
    }

    #[test]
    fn test_trailing_separator_on_home_is_not_doubled() {
        let resolver = ProjectPathResolver::new("/home/ben/", HostOs::Unix);
        let dir = resolver.resolve(&source("x.c"));
        assert_eq!(dir.path, PathBuf::from("/home/ben/Documents/c_projects/"));
    }
}

//! Extension token extraction from bare file names.
//!
//! The separator is the last `.` in the name, so `archive.tar.gz` has the
//! token `gz`. A name whose only dot is the leading one (`.bashrc`) has an
//! empty stem and the token `bashrc`.

const SEPARATOR: char = '.';

/// Byte index of the extension separator, or `None` when the name has no dot.
pub fn extension_index(name: &str) -> Option<usize> {
    name.rfind(SEPARATOR)
}

/// The extension token, if the name has a non-empty one
pub fn extension(name: &str) -> Option<&str> {
    let index = extension_index(name)?;
    let token = &name[index + SEPARATOR.len_utf8()..];
    if token.is_empty() { None } else { Some(token) }
}

/// Whether the name carries an extension token.
///
/// A trailing dot (`notes.`) does not count: the token would be empty and
/// could not name a project directory.
pub fn has_extension(name: &str) -> bool {
    extension(name).is_some()
}

/// Everything before the separator, or the whole name without one
pub fn stem(name: &str) -> &str {
    match extension_index(name) {
        Some(index) => &name[..index],
        None => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_dot_index_is_the_dot() {
        for name in ["file.go", "main.c", "a.b", "lib.rs", "x.cpp"] {
            assert_eq!(extension_index(name), name.find('.'), "{name}");
        }
    }

    #[test]
    fn test_index_table() {
        let cases: &[(&str, Option<usize>)] = &[
            ("", None),
            ("noext", None),
            ("README", None),
            ("file.go", Some(4)),
            ("a.b.c", Some(3)),
            ("archive.tar.gz", Some(11)),
            ("v1.2.3.rs", Some(6)),
            (".bashrc", Some(0)),
            ("notes.", Some(5)),
            ("..", Some(1)),
        ];

        for (name, expected) in cases {
            assert_eq!(extension_index(name), *expected, "index of {name:?}");
        }
    }

    #[test]
    fn test_has_extension() {
        assert!(!has_extension("noext"));
        assert!(!has_extension(""));
        assert!(!has_extension("notes."));
        assert!(has_extension("file.go"));
        assert!(has_extension(".bashrc"));
        assert!(has_extension("archive.tar.gz"));
    }

    #[test]
    fn test_extension_and_stem() {
        assert_eq!(extension("main.go"), Some("go"));
        assert_eq!(extension("archive.tar.gz"), Some("gz"));
        assert_eq!(extension(".bashrc"), Some("bashrc"));
        assert_eq!(extension("README"), None);

        assert_eq!(stem("main.go"), "main");
        assert_eq!(stem("archive.tar.gz"), "archive.tar");
        assert_eq!(stem(".bashrc"), "");
        assert_eq!(stem("README"), "README");
    }

    #[test]
    fn test_non_ascii_names() {
        assert_eq!(extension("año.c"), Some("c"));
        assert_eq!(stem("año.c"), "año");
    }
}

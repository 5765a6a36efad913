//! Common utility functions shared across the codebase.

use std::path::{Component, Path, PathBuf};

/// Lexically normalize a path, resolving `.` and `..` without touching the filesystem.
///
/// A `..` that would climb above a relative path's start is kept, so
/// `../a/./b/..` becomes `../a`.
///
/// # Examples
///
/// ```
/// use std::path::{Path, PathBuf};
/// use extract_strings::utils::normalize_path;
///
/// assert_eq!(normalize_path(Path::new("a/./b/../c")), PathBuf::from("a/c"));
/// assert_eq!(normalize_path(Path::new("../a/b/..")), PathBuf::from("../a"));
/// assert_eq!(normalize_path(Path::new("./")), PathBuf::from("."));
/// ```
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}

/// Render a relative path with `/` separators regardless of platform.
pub fn to_slash(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            Component::ParentDir => Some("..".to_string()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

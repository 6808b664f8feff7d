//! POSIX-style path helpers for virtual paths.
//!
//! Virtual paths are plain strings with `/` separators. They never touch
//! `std::path` because they describe a namespace, not a real filesystem.
//! All functions here are total over any string input.

/// Last path segment, ignoring trailing slashes.
///
/// # Examples
/// ```
/// use triefs_kernel::paths::basename;
///
/// assert_eq!(basename("/docs/readme.md"), "readme.md");
/// assert_eq!(basename("/docs/"), "docs");
/// assert_eq!(basename("readme.md"), "readme.md");
/// ```
pub fn basename(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    trimmed
        .rsplit('/')
        .next()
        .unwrap_or(trimmed)
        .to_string()
}

/// All segments but the last, ignoring trailing slashes.
///
/// Returns `/` for single-segment absolute paths and `.` when the path has
/// no separator at all.
///
/// # Examples
/// ```
/// use triefs_kernel::paths::dirname;
///
/// assert_eq!(dirname("/docs/readme.md"), "/docs");
/// assert_eq!(dirname("/docs"), "/");
/// assert_eq!(dirname("readme.md"), ".");
/// ```
pub fn dirname(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    match trimmed.rfind('/') {
        Some(0) => "/".to_string(),
        Some(idx) => trimmed[..idx].to_string(),
        None => ".".to_string(),
    }
}

/// Join two path fragments with single-separator normalization.
///
/// # Examples
/// ```
/// use triefs_kernel::paths::join;
///
/// assert_eq!(join("/docs", "readme.md"), "/docs/readme.md");
/// assert_eq!(join("/docs/", "/readme.md"), "/docs/readme.md");
/// assert_eq!(join("/", "readme.md"), "/readme.md");
/// ```
pub fn join(base: &str, name: &str) -> String {
    if base.is_empty() {
        return name.to_string();
    }
    if name.is_empty() {
        return base.to_string();
    }
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        name.trim_start_matches('/')
    )
}

//! Mount point handling.
//!
//! A mount point identifies a VFS instance's namespace root. Every
//! caller-supplied path is stripped down to its namespace-relative form on
//! the way in, and every returned path is re-prefixed on the way out. The
//! strip and prefix functions are plain string operations precomputed at
//! construction time.

use crate::paths;

/// A normalized mount path with strip/prefix helpers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountPoint {
    path: String,
}

impl MountPoint {
    /// Create a mount point, normalizing to a leading slash and no
    /// trailing slash.
    pub fn new(path: impl Into<String>) -> Self {
        let raw = path.into();
        let trimmed = raw.trim_end_matches('/');
        let path = if trimmed.is_empty() {
            "/".to_string()
        } else if !trimmed.starts_with('/') {
            format!("/{}", trimmed)
        } else {
            trimmed.to_string()
        };
        Self { path }
    }

    /// The normalized mount path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Strip the mount prefix, yielding the namespace-relative path.
    ///
    /// The mount path itself maps to `/`; paths outside the mount pass
    /// through unchanged (they are treated as already relative).
    pub fn strip<'a>(&self, path: &'a str) -> &'a str {
        if self.path == "/" {
            return path;
        }
        match path.strip_prefix(self.path.as_str()) {
            Some("") => "/",
            Some(rest) if rest.starts_with('/') => rest,
            _ => path,
        }
    }

    /// Re-add the mount prefix to a namespace-relative path.
    pub fn prefix(&self, relative: &str) -> String {
        if relative == "/" || relative.is_empty() {
            return self.path.clone();
        }
        paths::join(&self.path, relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_normalizes() {
        assert_eq!(MountPoint::new("/kui").path(), "/kui");
        assert_eq!(MountPoint::new("/kui/").path(), "/kui");
        assert_eq!(MountPoint::new("kui").path(), "/kui");
        assert_eq!(MountPoint::new("/").path(), "/");
        assert_eq!(MountPoint::new("").path(), "/");
    }

    #[test]
    fn strip_removes_prefix() {
        let mount = MountPoint::new("/kui");
        assert_eq!(mount.strip("/kui/docs/a.md"), "/docs/a.md");
        assert_eq!(mount.strip("/kui/"), "/");
        assert_eq!(mount.strip("/kui"), "/");
    }

    #[test]
    fn strip_passes_through_relative_paths() {
        let mount = MountPoint::new("/kui");
        assert_eq!(mount.strip("/docs/a.md"), "/docs/a.md");
        // no partial-segment matches
        assert_eq!(mount.strip("/kuix/docs"), "/kuix/docs");
    }

    #[test]
    fn strip_keeps_trailing_slash() {
        let mount = MountPoint::new("/kui");
        assert_eq!(mount.strip("/kui/docs/"), "/docs/");
    }

    #[test]
    fn prefix_round_trips() {
        let mount = MountPoint::new("/kui");
        assert_eq!(mount.prefix("/docs/a.md"), "/kui/docs/a.md");
        assert_eq!(mount.prefix("/"), "/kui");
        assert_eq!(mount.prefix(mount.strip("/kui/docs")), "/kui/docs");
    }

    #[test]
    fn root_mount_is_transparent() {
        let mount = MountPoint::new("/");
        assert_eq!(mount.strip("/docs/a.md"), "/docs/a.md");
        assert_eq!(mount.prefix("/docs/a.md"), "/docs/a.md");
    }
}

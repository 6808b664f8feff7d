//! Stat records: the unified metadata type returned by `ls` and `fstat`.
//!
//! None of this is real filesystem metadata: sizes and timestamps are
//! synthetic zeros, uid/gid are fixed sentinels, and the mode is derived
//! from the entry's cosmetic executable bit.

use serde::{Deserialize, Serialize};

/// Sentinel uid for virtual entries.
pub const VFS_UID: u32 = 0;
/// Sentinel gid for virtual entries.
pub const VFS_GID: u32 = 0;
/// Mode for regular (non-executable) entries.
pub const MODE_REGULAR: u32 = 0o644;
/// Mode for executable entries and directories.
pub const MODE_EXECUTABLE: u32 = 0o755;

/// Synthetic stat numbers for a virtual entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileStats {
    /// Size in bytes. Always 0; content lives in the backend.
    pub size: u64,
    /// Modification time in milliseconds. Always 0.
    pub mtime_ms: u64,
    pub uid: u32,
    pub gid: u32,
    /// Unix mode bits (0o755 or 0o644).
    pub mode: u32,
}

impl FileStats {
    /// Stats for a virtual entry with the given mode.
    pub fn synthetic(mode: u32) -> Self {
        Self {
            size: 0,
            mtime_ms: 0,
            uid: VFS_UID,
            gid: VFS_GID,
            mode,
        }
    }
}

/// Mount metadata tagged onto every returned entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MountTag {
    /// Always false; this namespace is not backed by a local disk.
    pub is_local: bool,
    /// Tags configured on the owning VFS instance.
    pub tags: Vec<String>,
    /// The mount path identifying the owning VFS instance.
    pub mount_path: String,
}

/// Dirent-style classification flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dirent {
    pub is_file: bool,
    pub is_directory: bool,
    /// Always false; symbolic links are out of scope.
    pub is_symbolic_link: bool,
    pub is_executable: bool,
    /// `-rw-r--r--`-style rendering of the mode.
    pub permissions: String,
    pub mount: MountTag,
}

/// The metadata record returned for each resolved entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatRecord {
    /// Base name of the entry.
    pub name: String,
    /// Full path, re-prefixed with the mount path.
    pub path: String,
    /// Human-facing name from the backend's display hook.
    pub name_for_display: String,
    /// Viewer-selection tag from the backend (defaults to "open").
    pub viewer: String,
    pub stats: FileStats,
    pub dirent: Dirent,
    /// Leaf content, populated only by `fstat` with `with_data`.
    pub data: Option<String>,
}

/// One `grepdir` hit: a leaf whose content matched the pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrepMatch {
    /// Full path, re-prefixed with the mount path.
    pub path: String,
    pub stats: FileStats,
}

/// Render mode bits as a ten-character permission string.
pub fn render_permissions(mode: u32, is_directory: bool) -> String {
    let mut out = String::with_capacity(10);
    out.push(if is_directory { 'd' } else { '-' });
    for shift in [6u32, 3, 0] {
        let bits = (mode >> shift) & 0o7;
        out.push(if bits & 0o4 != 0 { 'r' } else { '-' });
        out.push(if bits & 0o2 != 0 { 'w' } else { '-' });
        out.push(if bits & 0o1 != 0 { 'x' } else { '-' });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synthetic_stats_are_zeroed() {
        let stats = FileStats::synthetic(MODE_REGULAR);
        assert_eq!(stats.size, 0);
        assert_eq!(stats.mtime_ms, 0);
        assert_eq!(stats.uid, VFS_UID);
        assert_eq!(stats.gid, VFS_GID);
        assert_eq!(stats.mode, 0o644);
    }

    #[test]
    fn permissions_regular_file() {
        assert_eq!(render_permissions(0o644, false), "-rw-r--r--");
    }

    #[test]
    fn permissions_executable() {
        assert_eq!(render_permissions(0o755, false), "-rwxr-xr-x");
    }

    #[test]
    fn permissions_directory() {
        assert_eq!(render_permissions(0o755, true), "drwxr-xr-x");
    }
}

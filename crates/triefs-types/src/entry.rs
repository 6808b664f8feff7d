//! Entry types stored in the trie index.
//!
//! An entry is either a Directory marker (a namespace node with no content,
//! existing so that child listings and `mkdir` are observable) or a Leaf
//! carrying backend-defined data. The two are an explicit sum type: every
//! classification goes through the variant, never through an optional field.

/// A directory marker entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirMarker {
    /// Namespace-relative path, with the mount prefix already stripped.
    /// This is the key under which the entry is stored.
    pub mount_path: String,
    /// Cosmetic executable bit, surfaced in stat records.
    pub executable: bool,
}

/// A content-bearing entry.
///
/// `data` is backend-defined, typically a provenance record saying where
/// the real content can be fetched. The VFS never interprets it; content
/// loading goes through the backend's hooks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf<D> {
    /// Namespace-relative path, with the mount prefix already stripped.
    pub mount_path: String,
    /// Cosmetic executable bit, surfaced in stat records.
    pub executable: bool,
    /// Backend-defined payload.
    pub data: D,
}

/// An entry in the trie index.
///
/// Presence in the index is the sole source of truth for existence; there
/// is no separate existence flag, and directories are not required to have
/// explicit ancestor entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry<D> {
    Directory(DirMarker),
    Leaf(Leaf<D>),
}

impl<D> Entry<D> {
    /// Create a directory marker entry.
    pub fn directory(mount_path: impl Into<String>) -> Self {
        Entry::Directory(DirMarker {
            mount_path: mount_path.into(),
            executable: false,
        })
    }

    /// Create a leaf entry with backend data.
    pub fn leaf(mount_path: impl Into<String>, data: D) -> Self {
        Entry::Leaf(Leaf {
            mount_path: mount_path.into(),
            executable: false,
            data,
        })
    }

    /// The namespace-relative path this entry is stored under.
    pub fn mount_path(&self) -> &str {
        match self {
            Entry::Directory(dir) => &dir.mount_path,
            Entry::Leaf(leaf) => &leaf.mount_path,
        }
    }

    /// Returns true if this entry is a directory marker.
    pub fn is_directory(&self) -> bool {
        matches!(self, Entry::Directory(_))
    }

    /// Returns true if this entry is a content-bearing leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Entry::Leaf(_))
    }

    /// The cosmetic executable bit.
    pub fn executable(&self) -> bool {
        match self {
            Entry::Directory(dir) => dir.executable,
            Entry::Leaf(leaf) => leaf.executable,
        }
    }

    /// Borrow the leaf, if this entry is one.
    pub fn as_leaf(&self) -> Option<&Leaf<D>> {
        match self {
            Entry::Leaf(leaf) => Some(leaf),
            Entry::Directory(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_has_no_leaf() {
        let entry: Entry<()> = Entry::directory("/docs");
        assert!(entry.is_directory());
        assert!(!entry.is_leaf());
        assert!(entry.as_leaf().is_none());
        assert_eq!(entry.mount_path(), "/docs");
    }

    #[test]
    fn leaf_carries_data() {
        let entry = Entry::leaf("/docs/readme.md", "payload");
        assert!(entry.is_leaf());
        assert!(!entry.is_directory());
        assert_eq!(entry.as_leaf().map(|l| l.data), Some("payload"));
    }

    #[test]
    fn executable_defaults_off() {
        let entry: Entry<()> = Entry::directory("/bin");
        assert!(!entry.executable());
    }
}

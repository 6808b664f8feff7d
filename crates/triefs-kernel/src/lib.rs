//! triefs-kernel: a trie-indexed virtual filesystem.
//!
//! Provides POSIX-flavored operations (`ls`, `fstat`, `grepdir`, `cp`,
//! `rm`, `fwrite`, `mkdir`, `rmdir`, `fslice`) over an in-memory namespace
//! of virtual entries. Nothing here touches a disk: leaves record where
//! their content comes from and a pluggable [`vfs::ContentBackend`]
//! resolves it.
//!
//! Layering, bottom up:
//!
//! - [`paths`]: string-level path helpers
//! - [`glob`]: glob-to-regex translation used by entry resolution
//! - [`trie`]: the path-keyed index
//! - [`vfs`]: mount handling, the backend contract, and the operation layer

pub mod glob;
pub mod paths;
pub mod trie;
pub mod vfs;

pub use triefs_types::{
    Dirent, Entry, FileStats, GrepMatch, Leaf, MountTag, StatRecord, VfsError, VfsResult,
};
pub use vfs::{BundleBackend, BundleData, ContentBackend, LsOptions, SourceRef, TrieVfs};

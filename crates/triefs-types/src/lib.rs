//! triefs-types: shared contract types for the triefs virtual filesystem.
//!
//! This crate defines the types that cross the boundary between the VFS
//! kernel and its consumers:
//!
//! - **Entry**: the tagged Directory/Leaf union stored in the trie index
//! - **StatRecord**: the metadata record returned by `ls` and `fstat`
//! - **VfsError**: the operation error taxonomy with errno-style codes

pub mod entry;
pub mod error;
pub mod stat;

pub use entry::{DirMarker, Entry, Leaf};
pub use error::{VfsError, VfsResult};
pub use stat::{
    Dirent, FileStats, GrepMatch, MODE_EXECUTABLE, MODE_REGULAR, MountTag, StatRecord, VFS_GID,
    VFS_UID, render_permissions,
};

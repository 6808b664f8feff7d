//! Trie-indexed virtual filesystem.
//!
//! One `TrieVfs` instance serves one mount. Callers address it with full
//! mounted paths; internally everything is namespace-relative, keyed into
//! a path trie. Content is never stored in the index. Leaves record
//! provenance and a [`ContentBackend`] resolves it on demand.

mod bundle;
mod core;
mod mount;
mod source;
mod traits;

pub use bundle::{BundleBackend, BundleData};
pub use self::core::{LsOptions, TrieVfs};
pub use mount::MountPoint;
pub use source::SourceRef;
pub use traits::ContentBackend;

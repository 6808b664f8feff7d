//! The backend contract.
//!
//! The VFS core depends only on this trait, never on a concrete backend.
//! Backends own their content stores; these hooks are the only surface the
//! VFS uses to reach them. Hooks may suspend (content may live anywhere),
//! which is why the whole operation layer is async even though index
//! mutation itself never is.

use async_trait::async_trait;

use triefs_types::{Entry, Leaf, VfsResult};

use super::source::SourceRef;

/// Hooks a concrete content backend supplies to the VFS core.
#[async_trait]
pub trait ContentBackend: Send + Sync {
    /// Backend-defined payload stored in each leaf entry.
    type Data: Clone + Send + Sync + 'static;

    /// Resolve a leaf's content as text.
    async fn load_as_string(&self, leaf: &Leaf<Self::Data>) -> VfsResult<String>;

    /// Build leaf data recording provenance for a recognized copy source.
    fn data_for_source(&self, source: &SourceRef) -> Self::Data;

    /// Build leaf data for a direct write.
    ///
    /// The default discards the written content and records only the
    /// synthetic source reference; backends that can resolve writes
    /// override this to capture the content.
    fn data_for_write(&self, source: &SourceRef, _data: &str) -> Self::Data {
        self.data_for_source(source)
    }

    /// Human-facing name for an entry. Defaults to the raw name.
    async fn name_for_display(&self, name: &str, _entry: &Entry<Self::Data>) -> String {
        name.to_string()
    }

    /// Viewer-selection tag for a leaf. Defaults to a generic "open".
    fn viewer(&self, _leaf: &Leaf<Self::Data>) -> String {
        "open".to_string()
    }
}

//! Reference backend over bundled documents.
//!
//! Content lives in an in-process table keyed by source reference. Leaf
//! data carries the provenance reference plus, for direct writes, the
//! written content inline. This is the backend the tests run against and
//! the model for real backends that fetch from elsewhere.

use std::collections::HashMap;

use async_trait::async_trait;

use triefs_types::{Entry, Leaf, VfsError, VfsResult};

use super::source::SourceRef;
use super::traits::ContentBackend;

/// Leaf payload: provenance, with written content captured inline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleData {
    pub source: SourceRef,
    pub inline: Option<String>,
}

/// Backend resolving content from a bundled-document table.
#[derive(Debug, Clone, Default)]
pub struct BundleBackend {
    docs: HashMap<String, String>,
    titles: HashMap<String, String>,
}

impl BundleBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a bundled document under its source reference.
    pub fn with_doc(mut self, source: impl Into<String>, content: impl Into<String>) -> Self {
        self.docs.insert(source.into(), content.into());
        self
    }

    /// Register a display title for a source reference.
    pub fn with_title(mut self, source: impl Into<String>, title: impl Into<String>) -> Self {
        self.titles.insert(source.into(), title.into());
        self
    }
}

#[async_trait]
impl ContentBackend for BundleBackend {
    type Data = BundleData;

    async fn load_as_string(&self, leaf: &Leaf<Self::Data>) -> VfsResult<String> {
        if let Some(inline) = &leaf.data.inline {
            return Ok(inline.clone());
        }
        self.docs
            .get(&leaf.data.source.raw)
            .cloned()
            .ok_or_else(|| VfsError::NotFound(leaf.data.source.raw.clone()))
    }

    fn data_for_source(&self, source: &SourceRef) -> Self::Data {
        BundleData {
            source: source.clone(),
            inline: None,
        }
    }

    fn data_for_write(&self, source: &SourceRef, data: &str) -> Self::Data {
        BundleData {
            source: source.clone(),
            inline: Some(data.to_string()),
        }
    }

    async fn name_for_display(&self, name: &str, entry: &Entry<Self::Data>) -> String {
        entry
            .as_leaf()
            .and_then(|leaf| self.titles.get(&leaf.data.source.raw))
            .cloned()
            .unwrap_or_else(|| name.to_string())
    }
}

//! Recognized copy-source references.
//!
//! `cp` does not copy bytes: it records where content can be fetched and
//! defers loading to the backend. Only bundled-content references are
//! accepted as sources, identified by a fixed naming convention:
//!
//! - `plugin://plugin-<name>/notebooks/<file>.<ext>`: notebook bundled
//!   with a plugin
//! - `plugin://client/<dir>/.../<file>.<ext>`: content bundled with the
//!   client itself
//!
//! Anything else fails `cp` immediately, before any index mutation.

use std::sync::LazyLock;

use regex::Regex;

static PLUGIN_SOURCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^plugin://plugin-[A-Za-z0-9_-]+/notebooks/([A-Za-z0-9_.-]+\.[A-Za-z0-9]+)$")
        .expect("plugin source pattern is valid")
});

static CLIENT_SOURCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^plugin://client/(?:[A-Za-z0-9_.-]+/)*([A-Za-z0-9_.-]+\.[A-Za-z0-9]+)$")
        .expect("client source pattern is valid")
});

/// A recognized content-source reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRef {
    /// The source reference, verbatim.
    pub raw: String,
    /// File name including extension, extracted from the reference.
    pub file_name: String,
}

impl SourceRef {
    /// Parse a copy source. Returns `None` for unrecognized shapes.
    pub fn parse(raw: &str) -> Option<Self> {
        let captures = PLUGIN_SOURCE
            .captures(raw)
            .or_else(|| CLIENT_SOURCE.captures(raw))?;
        let file_name = captures.get(1)?.as_str().to_string();
        Some(Self {
            raw: raw.to_string(),
            file_name,
        })
    }

    /// Build the synthetic reference `fwrite` records for a file name.
    ///
    /// Returns `None` when the name has no extension; the naming
    /// convention requires one.
    pub fn synthetic(file_name: &str) -> Option<Self> {
        let (stem, ext) = file_name.rsplit_once('.')?;
        if stem.is_empty() || ext.is_empty() {
            return None;
        }
        Some(Self {
            raw: format!("plugin://client/{}", file_name),
            file_name: file_name.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plugin_notebook_source() {
        let source = SourceRef::parse("plugin://plugin-kubectl/notebooks/usage.json");
        assert_eq!(
            source.map(|s| s.file_name),
            Some("usage.json".to_string())
        );
    }

    #[test]
    fn parses_client_source_with_dirs() {
        let source = SourceRef::parse("plugin://client/notebooks/readme.md").unwrap();
        assert_eq!(source.file_name, "readme.md");
        assert_eq!(source.raw, "plugin://client/notebooks/readme.md");
    }

    #[test]
    fn parses_client_source_flat() {
        let source = SourceRef::parse("plugin://client/welcome.md").unwrap();
        assert_eq!(source.file_name, "welcome.md");
    }

    #[test]
    fn rejects_unrecognized_shapes() {
        assert!(SourceRef::parse("/local/path.md").is_none());
        assert!(SourceRef::parse("plugin://client/no-extension").is_none());
        assert!(SourceRef::parse("plugin://plugin-x/other/file.md").is_none());
        assert!(SourceRef::parse("https://example.com/file.md").is_none());
    }

    #[test]
    fn synthetic_requires_extension() {
        let source = SourceRef::synthetic("notes.md").unwrap();
        assert_eq!(source.raw, "plugin://client/notes.md");
        assert_eq!(source.file_name, "notes.md");

        assert!(SourceRef::synthetic("noext").is_none());
        assert!(SourceRef::synthetic(".hidden").is_none());
        assert!(SourceRef::synthetic("trailing.").is_none());
    }
}

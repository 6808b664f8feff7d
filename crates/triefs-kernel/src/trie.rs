//! Trie index keyed by virtual path.
//!
//! Nodes are keyed by path segment; each node optionally holds one entry.
//! The index enforces no uniqueness beyond replace-on-insert and supports
//! the one retrieval primitive everything else is built on: collecting all
//! entries reachable from a *string* prefix. Whole segments walk the trie;
//! a trailing partial segment filters children by `starts_with`, so a
//! lookup key like `/docs/rea` reaches `/docs/readme.md`.

use std::collections::BTreeMap;

use triefs_types::Entry;

#[derive(Debug, Clone)]
struct Node<D> {
    // BTreeMap keeps retrieval order deterministic
    children: BTreeMap<String, Node<D>>,
    entry: Option<Entry<D>>,
}

impl<D> Default for Node<D> {
    fn default() -> Self {
        Self {
            children: BTreeMap::new(),
            entry: None,
        }
    }
}

/// Path-keyed trie storing Directory and Leaf entries.
#[derive(Debug, Clone)]
pub struct PathTrie<D> {
    root: Node<D>,
    len: usize,
}

impl<D> Default for PathTrie<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> PathTrie<D> {
    /// Create an empty trie.
    pub fn new() -> Self {
        Self {
            root: Node::default(),
            len: 0,
        }
    }

    /// Number of entries stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn segments(key: &str) -> impl Iterator<Item = &str> {
        key.split('/').filter(|s| !s.is_empty())
    }

    /// Insert an entry under `key`, replacing any previous entry there.
    ///
    /// There is no partial update: callers mutate by re-insertion.
    pub fn insert(&mut self, key: &str, entry: Entry<D>) {
        let mut node = &mut self.root;
        for segment in Self::segments(key) {
            node = node.children.entry(segment.to_string()).or_default();
        }
        if node.entry.replace(entry).is_none() {
            self.len += 1;
        }
    }

    /// Exact lookup by key.
    pub fn get(&self, key: &str) -> Option<&Entry<D>> {
        let mut node = &self.root;
        for segment in Self::segments(key) {
            node = node.children.get(segment)?;
        }
        node.entry.as_ref()
    }

    /// Remove the entry under `key`, pruning interior nodes left empty.
    ///
    /// Returns the removed entry; absent keys are a no-op.
    pub fn remove(&mut self, key: &str) -> Option<Entry<D>> {
        let segments: Vec<&str> = Self::segments(key).collect();
        let removed = Self::remove_at(&mut self.root, &segments);
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    fn remove_at(node: &mut Node<D>, segments: &[&str]) -> Option<Entry<D>> {
        match segments.split_first() {
            None => node.entry.take(),
            Some((head, rest)) => {
                let child = node.children.get_mut(*head)?;
                let removed = Self::remove_at(child, rest);
                if removed.is_some() && child.entry.is_none() && child.children.is_empty() {
                    node.children.remove(*head);
                }
                removed
            }
        }
    }

    /// All entries whose key is reachable from a string prefix.
    ///
    /// `/docs/` returns the `/docs` subtree (the `/docs` entry included);
    /// `/docs/rea` walks to `/docs` and descends into every child whose
    /// segment starts with `rea`. The empty prefix reaches every entry.
    pub fn find_prefix(&self, prefix: &str) -> Vec<&Entry<D>> {
        let segments: Vec<&str> = Self::segments(prefix).collect();
        let partial_last = !prefix.ends_with('/') && !segments.is_empty();
        let whole = if partial_last {
            &segments[..segments.len() - 1]
        } else {
            &segments[..]
        };

        let mut node = &self.root;
        for segment in whole {
            match node.children.get(*segment) {
                Some(child) => node = child,
                None => return Vec::new(),
            }
        }

        let mut out = Vec::new();
        if partial_last {
            let last = segments[segments.len() - 1];
            for (name, child) in &node.children {
                if name.starts_with(last) {
                    Self::collect(child, &mut out);
                }
            }
        } else {
            Self::collect(node, &mut out);
        }
        out
    }

    fn collect<'a>(node: &'a Node<D>, out: &mut Vec<&'a Entry<D>>) {
        if let Some(entry) = &node.entry {
            out.push(entry);
        }
        for child in node.children.values() {
            Self::collect(child, out);
        }
    }
}

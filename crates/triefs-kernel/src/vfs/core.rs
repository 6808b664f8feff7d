//! The VFS core: entry resolution and the operation layer.
//!
//! `TrieVfs` owns the trie index for one mount and implements the public
//! operation contract on top of two things: the entry resolver (`find`),
//! which combines trie prefix retrieval with glob/directory pattern
//! matching, and the backend hooks for content loading and display naming.
//!
//! Concurrency model: single logical owner, cooperative interleaving.
//! Index mutation is synchronous and never suspends while the lock is
//! held; only backend hooks await. Batch operations fan out per-path work
//! and join the results.

use std::sync::RwLock;

use futures::future::try_join_all;
use regex::Regex;

use triefs_types::{
    Dirent, Entry, FileStats, GrepMatch, MODE_EXECUTABLE, MODE_REGULAR, MountTag, StatRecord,
    VfsError, VfsResult, render_permissions,
};

use crate::glob::{directory_regex, glob_to_regex, literal_prefix};
use crate::paths;
use crate::trie::PathTrie;

use super::mount::MountPoint;
use super::source::SourceRef;
use super::traits::ContentBackend;

/// Options honored by `ls`.
#[derive(Debug, Clone, Default)]
pub struct LsOptions {
    /// List the named entries themselves rather than their children
    /// (`ls -d` semantics).
    pub directories_only: bool,
}

/// A trie-indexed virtual filesystem over one mount.
pub struct TrieVfs<B: ContentBackend> {
    mount: MountPoint,
    tags: Vec<String>,
    backend: B,
    index: RwLock<PathTrie<B::Data>>,
}

impl<B: ContentBackend> TrieVfs<B> {
    /// Create an empty VFS rooted at `mount_path`.
    pub fn new(mount_path: impl Into<String>, backend: B) -> Self {
        Self {
            mount: MountPoint::new(mount_path),
            tags: Vec::new(),
            backend,
            index: RwLock::new(PathTrie::new()),
        }
    }

    /// Attach mount tags, surfaced in every returned entry's metadata.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// The mount path identifying this VFS instance.
    pub fn mount_path(&self) -> &str {
        self.mount.path()
    }

    // ============================================================
    // Entry resolver
    // ============================================================

    /// Resolve a namespace-relative path expression to matching entries.
    ///
    /// The trie candidate set is bounded by the query's literal prefix; no
    /// full-index scan is ever attempted, so a prefix that reaches nothing
    /// yields the empty set even if an unusual glob could have matched
    /// elsewhere.
    fn find(
        &self,
        filepath: &str,
        directory_only: bool,
        exact: bool,
    ) -> VfsResult<Vec<Entry<B::Data>>> {
        let dir_re = directory_regex(filepath);
        let glob_re = glob_to_regex(filepath);
        let prefix = literal_prefix(filepath);

        let index = self.index.read().map_err(|_| VfsError::Poisoned)?;
        let candidates = index.find_prefix(prefix);
        tracing::debug!(
            filepath,
            candidates = candidates.len(),
            directory_only,
            exact,
            "find"
        );
        if candidates.is_empty() {
            return Ok(Vec::new());
        }

        if directory_only {
            // the listing entry itself, not its children; keys are stored
            // without trailing slashes, so tolerate one on the query
            let trimmed = filepath.trim_end_matches('/');
            return Ok(candidates
                .into_iter()
                .filter(|e| e.mount_path() == filepath || e.mount_path() == trimmed)
                .cloned()
                .collect());
        }

        let flexible = candidates.into_iter().filter(|e| {
            if exact {
                e.mount_path() == filepath
            } else {
                glob_re.is_match(e.mount_path()) || dir_re.is_match(e.mount_path())
            }
        });

        if exact {
            Ok(flexible.cloned().collect())
        } else {
            // listing a directory must not return the directory itself as
            // one of its own children
            Ok(flexible
                .filter(|e| !(e.is_directory() && e.mount_path() == filepath))
                .cloned()
                .collect())
        }
    }

    // ============================================================
    // Stat assembly
    // ============================================================

    async fn stat_record(&self, entry: &Entry<B::Data>, with_data: bool) -> VfsResult<StatRecord> {
        let name = paths::basename(entry.mount_path());
        let name_for_display = self.backend.name_for_display(&name, entry).await;
        let mode = if entry.is_directory() || entry.executable() {
            MODE_EXECUTABLE
        } else {
            MODE_REGULAR
        };

        let (viewer, data) = match entry.as_leaf() {
            Some(leaf) => {
                let data = if with_data {
                    Some(self.backend.load_as_string(leaf).await?)
                } else {
                    None
                };
                (self.backend.viewer(leaf), data)
            }
            None => ("open".to_string(), None),
        };

        let is_directory = entry.is_directory();
        Ok(StatRecord {
            name,
            path: self.mount.prefix(entry.mount_path()),
            name_for_display,
            viewer,
            stats: FileStats::synthetic(mode),
            dirent: Dirent {
                is_file: !is_directory,
                is_directory,
                is_symbolic_link: false,
                is_executable: entry.executable(),
                permissions: render_permissions(mode, is_directory),
                mount: MountTag {
                    is_local: false,
                    tags: self.tags.clone(),
                    mount_path: self.mount.path().to_string(),
                },
            },
            data,
        })
    }

    // ============================================================
    // Read operations
    // ============================================================

    /// List entries for each input path, flattened.
    ///
    /// Paths that resolve to nothing contribute no records; they do not
    /// fail the batch.
    pub async fn ls(&self, options: &LsOptions, filepaths: &[&str]) -> VfsResult<Vec<StatRecord>> {
        let groups =
            try_join_all(filepaths.iter().map(|fp| self.ls_one(options, fp))).await?;
        Ok(groups.into_iter().flatten().collect())
    }

    async fn ls_one(&self, options: &LsOptions, filepath: &str) -> VfsResult<Vec<StatRecord>> {
        let relative = self.mount.strip(filepath);
        let entries = self.find(relative, options.directories_only, false)?;
        try_join_all(entries.iter().map(|e| self.stat_record(e, false))).await
    }

    /// Stat a single path, resolved exactly.
    ///
    /// Zero matches fail with [`VfsError::NotFound`] unless `enoent_ok`,
    /// which returns `None` instead. With `with_data`, leaf content is
    /// loaded through the backend hook.
    pub async fn fstat(
        &self,
        filepath: &str,
        with_data: bool,
        enoent_ok: bool,
    ) -> VfsResult<Option<StatRecord>> {
        let relative = self.mount.strip(filepath);
        let matches = self.find(relative, false, true)?;
        match matches.first() {
            Some(entry) => Ok(Some(self.stat_record(entry, with_data).await?)),
            None if enoent_ok => Ok(None),
            None => Err(VfsError::NotFound(filepath.to_string())),
        }
    }

    /// Single-file grep is not supported at this layer; always succeeds
    /// with an empty result.
    pub async fn grep(&self, _filepath: &str, _pattern: &str) -> VfsResult<Vec<GrepMatch>> {
        Ok(Vec::new())
    }

    /// Search leaf content under each input path for a pattern.
    ///
    /// Leaves whose content fails to load are skipped rather than failing
    /// the batch.
    pub async fn grepdir(&self, filepaths: &[&str], pattern: &str) -> VfsResult<Vec<GrepMatch>> {
        let re = Regex::new(pattern).map_err(|e| VfsError::InvalidPattern(e.to_string()))?;
        let groups =
            try_join_all(filepaths.iter().map(|fp| self.grepdir_one(fp, &re))).await?;
        Ok(groups.into_iter().flatten().collect())
    }

    async fn grepdir_one(&self, filepath: &str, re: &Regex) -> VfsResult<Vec<GrepMatch>> {
        let relative = self.mount.strip(filepath);
        let entries = self.find(relative, false, false)?;

        let mut hits = Vec::new();
        for entry in &entries {
            let Some(leaf) = entry.as_leaf() else {
                continue;
            };
            let content = match self.backend.load_as_string(leaf).await {
                Ok(content) => content,
                Err(e) => {
                    tracing::warn!(path = entry.mount_path(), error = %e, "grepdir: skipping leaf");
                    continue;
                }
            };
            if re.is_match(&content) {
                hits.push(GrepMatch {
                    path: self.mount.prefix(entry.mount_path()),
                    stats: FileStats::synthetic(MODE_REGULAR),
                });
            }
        }
        Ok(hits)
    }

    /// Read a substring of leaf content.
    ///
    /// Offsets are character-based. Non-leaves and unresolved paths yield
    /// an empty string.
    pub async fn fslice(&self, filename: &str, offset: usize, length: usize) -> VfsResult<String> {
        let relative = self.mount.strip(filename);
        let matches = self.find(relative, false, true)?;
        match matches.first().and_then(|e| e.as_leaf()) {
            Some(leaf) => {
                let content = self.backend.load_as_string(leaf).await?;
                Ok(content.chars().skip(offset).take(length).collect())
            }
            None => Ok(String::new()),
        }
    }

    // ============================================================
    // Mutations
    // ============================================================

    /// Copy bundled-content sources into the namespace.
    ///
    /// Sources must match a recognized reference shape; the inserted leaf
    /// records provenance, it does not copy bytes. All sources are
    /// validated before any insertion, so a failed batch leaves the index
    /// untouched.
    pub async fn cp(&self, src_filepaths: &[&str], dst_filepath: &str) -> VfsResult<()> {
        let sources = src_filepaths
            .iter()
            .map(|src| SourceRef::parse(src).ok_or_else(|| VfsError::InvalidSource(src.to_string())))
            .collect::<VfsResult<Vec<_>>>()?;
        let dst = self.mount.strip(dst_filepath);

        let mut index = self.index.write().map_err(|_| VfsError::Poisoned)?;
        let dst_is_directory =
            dst.ends_with('/') || index.get(dst).is_some_and(|e| e.is_directory());

        let mut inserts = Vec::with_capacity(sources.len());
        for source in &sources {
            // copying into a directory appends the source file name;
            // otherwise the destination itself is the new leaf path
            let target = if dst_is_directory {
                paths::join(dst, &source.file_name)
            } else {
                dst.to_string()
            };
            let parent = paths::dirname(&target);
            if parent != "/" && !index.get(&parent).is_some_and(|e| e.is_directory()) {
                return Err(VfsError::MissingDirectory(self.mount.prefix(&parent)));
            }
            inserts.push((target, self.backend.data_for_source(source)));
        }

        for (target, data) in inserts {
            tracing::debug!(target, "cp: recording provenance leaf");
            index.insert(&target, Entry::leaf(target.clone(), data));
        }
        Ok(())
    }

    /// Remove the entry at a path. Absent keys are a no-op.
    pub fn rm(&self, filepath: &str) -> VfsResult<()> {
        let relative = self.mount.strip(filepath);
        let mut index = self.index.write().map_err(|_| VfsError::Poisoned)?;
        index.remove(relative);
        Ok(())
    }

    /// Insert or overwrite a leaf at a path.
    ///
    /// The file name must carry an extension; the leaf records a synthetic
    /// source reference built from it, with the written content handed to
    /// the backend's write hook.
    pub fn fwrite(&self, filepath: &str, data: &str) -> VfsResult<()> {
        let relative = self.mount.strip(filepath);
        let name = paths::basename(relative);
        let source =
            SourceRef::synthetic(&name).ok_or_else(|| VfsError::InvalidFilename(name.clone()))?;
        let leaf_data = self.backend.data_for_write(&source, data);

        let mut index = self.index.write().map_err(|_| VfsError::Poisoned)?;
        index.insert(relative, Entry::leaf(relative, leaf_data));
        Ok(())
    }

    /// Insert a directory marker. Ancestors need not exist.
    pub fn mkdir(&self, filepath: &str) -> VfsResult<()> {
        let relative = self.mount.strip(filepath);
        let mut index = self.index.write().map_err(|_| VfsError::Poisoned)?;
        index.insert(relative, Entry::directory(relative));
        Ok(())
    }

    /// Remove a directory entry. Delegates to [`rm`](Self::rm): removal
    /// does not cascade to pattern-matched children.
    pub fn rmdir(&self, filepath: &str) -> VfsResult<()> {
        self.rm(filepath)
    }
}

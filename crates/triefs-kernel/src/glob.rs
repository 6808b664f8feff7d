//! Glob-to-pattern translation for trie lookups.
//!
//! Queries arrive as shell-style globs (`*` plus literal separators). They
//! are translated into anchored regexes matched against candidate keys, and
//! a second "directory contents" pattern turns "list the contents of X"
//! into plain pattern matching; the index itself has no notion of
//! directory traversal.

use regex::Regex;

/// Escape regex metacharacters, turning each `*` into "match any sequence".
fn escape_keeping_star(path: &str) -> String {
    let mut out = String::with_capacity(path.len() + 8);
    for c in path.chars() {
        match c {
            '*' => out.push_str(".*"),
            '.' | '^' | '$' | '+' | '?' | '(' | ')' | '[' | ']' | '{' | '}' | '|' | '\\' => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}

/// Compile an already-escaped pattern body, anchored both ends.
fn anchored(body: &str) -> Regex {
    // escape_keeping_star leaves no unbalanced metacharacters behind
    Regex::new(&format!("^{}$", body)).expect("escaped pattern is always valid")
}

/// Translate a glob path into an anchored matcher over candidate keys.
///
/// Separators match literally; `*` matches any sequence of characters,
/// including separators.
///
/// # Examples
/// ```
/// use triefs_kernel::glob::glob_to_regex;
///
/// let re = glob_to_regex("/a/*");
/// assert!(re.is_match("/a/b"));
/// assert!(!re.is_match("/b/c"));
/// ```
pub fn glob_to_regex(path: &str) -> Regex {
    anchored(&escape_keeping_star(path))
}

/// Translate a path into its "directory contents" matcher.
///
/// A trailing separator is appended when missing; the result matches the
/// prefix followed by exactly one more non-separator segment, optionally
/// slash-terminated, and nothing else.
///
/// # Examples
/// ```
/// use triefs_kernel::glob::directory_regex;
///
/// let re = directory_regex("/docs");
/// assert!(re.is_match("/docs/readme.md"));
/// assert!(re.is_match("/docs/sub/"));
/// assert!(!re.is_match("/docs"));
/// assert!(!re.is_match("/docs/sub/deep.md"));
/// ```
pub fn directory_regex(path: &str) -> Regex {
    let prefix = if path.ends_with('/') {
        path.to_string()
    } else {
        format!("{}/", path)
    };
    anchored(&format!("{}[^/]+/?", escape_keeping_star(&prefix)))
}

/// The literal portion of a query, up to the first glob fragment.
///
/// Used to bound the trie candidate set before pattern matching kicks in.
pub fn literal_prefix(path: &str) -> &str {
    match path.find(['*', '{']) {
        Some(idx) => &path[..idx],
        None => path,
    }
}

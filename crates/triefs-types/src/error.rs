//! Operation error taxonomy.
//!
//! All mutation operations validate before touching the index, so a failed
//! `cp`/`fwrite`/`mkdir` never leaves a partial entry behind.

use thiserror::Error;

/// Result type for VFS operations.
pub type VfsResult<T> = Result<T, VfsError>;

/// VFS operation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VfsError {
    /// `fstat` with zero matches and `enoent_ok` unset.
    #[error("no such file or directory: {0}")]
    NotFound(String),

    /// `cp` source not matching any recognized naming convention.
    #[error("copy source not recognized: {0}")]
    InvalidSource(String),

    /// `cp` into a parent directory absent from the index.
    #[error("destination directory does not exist: {0}")]
    MissingDirectory(String),

    /// `fwrite` with no extractable extension.
    #[error("filename has no extension: {0}")]
    InvalidFilename(String),

    /// `grepdir` with an unparseable search pattern.
    #[error("invalid pattern: {0}")]
    InvalidPattern(String),

    /// Failure reported by a backend content hook.
    #[error("backend error: {0}")]
    Backend(String),

    /// The index lock was poisoned by a panicking writer.
    #[error("index lock poisoned")]
    Poisoned,
}

impl VfsError {
    /// Numeric code for downstream classification, errno-style.
    pub fn errno(&self) -> i32 {
        match self {
            VfsError::NotFound(_) | VfsError::MissingDirectory(_) => 2,
            VfsError::InvalidSource(_)
            | VfsError::InvalidFilename(_)
            | VfsError::InvalidPattern(_) => 22,
            VfsError::Backend(_) | VfsError::Poisoned => 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_enoent() {
        assert_eq!(VfsError::NotFound("/x".into()).errno(), 2);
        assert_eq!(VfsError::MissingDirectory("/x".into()).errno(), 2);
    }

    #[test]
    fn invalid_inputs_are_einval() {
        assert_eq!(VfsError::InvalidSource("x".into()).errno(), 22);
        assert_eq!(VfsError::InvalidFilename("x".into()).errno(), 22);
        assert_eq!(VfsError::InvalidPattern("[".into()).errno(), 22);
    }

    #[test]
    fn display_includes_path() {
        let err = VfsError::NotFound("/kui/missing".into());
        assert!(err.to_string().contains("/kui/missing"));
    }
}

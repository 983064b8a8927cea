//! The document root and request-target validation.

use std::path::{Path, PathBuf};

use log::debug;

/// File served when the target is exactly "/".
pub const DEFAULT_DOCUMENT: &str = "index.html";

/// How request targets are checked against the document root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathPolicy {
    /// String checks only: no ".." anywhere in the target and the
    /// concatenated path must start with the document root.
    #[default]
    Literal,
    /// The literal checks, then the resolved file and the document root are
    /// canonicalized and the file must live under the root. Symlinks pointing
    /// outside the root are rejected.
    Canonical,
}

/// Returns true if `target` may be resolved against `doc_root`.
///
/// This is a purely syntactic check on strings. It does not see
/// percent-encoded dot segments, and a target is joined by plain
/// concatenation, so symlinks inside the root are followed.
pub fn is_valid(target: &str, doc_root: &str) -> bool {
    if target.contains("..") {
        return false;
    }

    let file_path = format!("{doc_root}{target}");
    file_path.starts_with(doc_root)
}

/// The directory all served files are read from.
#[derive(Debug, Clone)]
pub struct DocumentRoot {
    root: String,
    policy: PathPolicy,
}

impl DocumentRoot {
    pub fn new(root: impl Into<String>, policy: PathPolicy) -> Self {
        Self {
            root: root.into(),
            policy,
        }
    }

    /// The root as configured.
    pub fn as_str(&self) -> &str {
        &self.root
    }

    /// The file path a target maps to: root and target concatenated, with
    /// the default document appended for "/".
    pub fn resolve(&self, target: &str) -> PathBuf {
        let mut file_path = format!("{}{target}", self.root);
        if target == "/" {
            file_path.push_str(DEFAULT_DOCUMENT);
        }
        PathBuf::from(file_path)
    }

    /// Applies the configured policy to `target`.
    pub fn is_valid(&self, target: &str) -> bool {
        if !is_valid(target, &self.root) {
            return false;
        }

        match self.policy {
            PathPolicy::Literal => true,
            PathPolicy::Canonical => self.is_contained(&self.resolve(target)),
        }
    }

    fn is_contained(&self, file_path: &Path) -> bool {
        let root = match Path::new(&self.root).canonicalize() {
            Ok(root) => root,
            Err(e) => {
                debug!("Cannot canonicalize document root {}: {e}", self.root);
                return false;
            }
        };

        match file_path.canonicalize() {
            Ok(resolved) => resolved.starts_with(&root),
            Err(e) => {
                debug!("Cannot canonicalize {}: {e}", file_path.display());
                false
            }
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
use std::cell::RefCell;
#[cfg(any(test, feature = "test-support"))]
use std::collections::HashSet;
#[cfg(any(test, feature = "test-support"))]
use std::path::{Path, PathBuf};

#[cfg(any(test, feature = "test-support"))]
use super::ExistsDir;

/// In-memory directory set with a query log.
///
/// Uses `RefCell` for interior mutability — all methods take `&self`.
///
/// # Path Semantics
///
/// Paths are stored as raw [`PathBuf`] keys and compared the way `Path`
/// compares them: interior `.` components are ignored, but `..` and symlinks
/// are never resolved. `"/home/alice/x/.."` and `"/home/alice"` are distinct
/// entries, and adding a directory does not add its ancestors.
///
/// ```ignore
/// let fs = MemFs::new();
/// fs.add_dir("/home/alice/.cache");
///
/// assert!(fs.is_dir(Path::new("/home/alice/.cache")));
/// assert!(!fs.is_dir(Path::new("/home/alice")));
/// ```
#[cfg(any(test, feature = "test-support"))]
#[derive(Debug)]
pub struct MemFs {
    dirs: RefCell<HashSet<PathBuf>>,
    queried: RefCell<Vec<PathBuf>>,
}

#[cfg(any(test, feature = "test-support"))]
impl MemFs {
    pub fn new() -> Self {
        Self {
            dirs: RefCell::new(HashSet::new()),
            queried: RefCell::new(Vec::new()),
        }
    }

    /// Builds a filesystem where every listed path is an existing directory.
    pub fn with_dirs<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let fs = Self::new();
        for path in paths {
            fs.add_dir(path);
        }
        fs
    }

    pub fn add_dir(&self, path: impl Into<PathBuf>) -> &Self {
        self.dirs.borrow_mut().insert(path.into());
        self
    }

    pub fn remove_dir(&self, path: &Path) {
        self.dirs.borrow_mut().remove(path);
    }

    pub fn len(&self) -> usize {
        self.dirs.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.dirs.borrow().is_empty()
    }

    /// Every path passed to [`ExistsDir::is_dir`], in call order.
    pub fn queried(&self) -> Vec<PathBuf> {
        self.queried.borrow().clone()
    }
}

#[cfg(any(test, feature = "test-support"))]
impl Default for MemFs {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(any(test, feature = "test-support"))]
impl ExistsDir for MemFs {
    fn is_dir(&self, path: &Path) -> bool {
        self.queried.borrow_mut().push(path.to_path_buf());
        self.dirs.borrow().contains(path)
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn test_memfs_empty() {
        let fs = MemFs::default();
        assert!(fs.is_empty());
        assert!(!fs.is_dir(Path::new("/")));
    }

    #[test]
    fn test_memfs_add_dir() {
        let fs = MemFs::new();
        fs.add_dir("/tmp").add_dir("/var/tmp");

        assert!(fs.is_dir(Path::new("/tmp")));
        assert!(fs.is_dir(Path::new("/var/tmp")));
        assert_eq!(fs.len(), 2);
    }

    #[test]
    fn test_memfs_no_implicit_ancestors() {
        let fs = MemFs::with_dirs(["/home/alice/.cache"]);

        assert!(fs.is_dir(Path::new("/home/alice/.cache")));
        assert!(!fs.is_dir(Path::new("/home/alice")));
    }

    #[test]
    fn test_memfs_does_not_resolve_parent_components() {
        let fs = MemFs::with_dirs(["/home/alice"]);
        assert!(!fs.is_dir(Path::new("/home/alice/x/..")));
    }

    #[test]
    fn test_memfs_ignores_interior_current_dir() {
        let fs = MemFs::with_dirs(["/home/alice/.cache"]);
        assert!(fs.is_dir(Path::new("/home/alice/./.cache")));
    }

    #[test]
    fn test_memfs_remove_dir() {
        let fs = MemFs::with_dirs(["/a"]);
        fs.remove_dir(Path::new("/a"));

        assert!(!fs.is_dir(Path::new("/a")));
        assert!(fs.is_empty());
    }

    #[test]
    fn test_memfs_records_queries_in_order() {
        let fs = MemFs::with_dirs(["/b"]);
        fs.is_dir(Path::new("/a"));
        fs.is_dir(Path::new("/b"));

        assert_eq!(fs.queried(), vec![PathBuf::from("/a"), PathBuf::from("/b")]);
    }
}

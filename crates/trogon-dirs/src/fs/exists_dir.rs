use std::path::Path;

/// Directory-existence predicate.
///
/// Implementations must answer `false` for anything they cannot confirm is a
/// directory — missing paths, regular files, permission errors — rather than
/// surfacing an error.
pub trait ExistsDir {
    fn is_dir(&self, path: &Path) -> bool;
}

impl<T: ExistsDir + ?Sized> ExistsDir for &T {
    #[inline]
    fn is_dir(&self, path: &Path) -> bool {
        (**self).is_dir(path)
    }
}

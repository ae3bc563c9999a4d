#[cfg(any(test, feature = "test-support"))]
use std::collections::HashMap;
#[cfg(any(test, feature = "test-support"))]
use std::path::PathBuf;

#[cfg(any(test, feature = "test-support"))]
use super::DirKind;

/// Hard-coded answers for code that is generic over the directory traits.
///
/// No environment, no filesystem, no aliasing: a kind that was never
/// [`set`](FixedDirs::set) is `None`.
#[cfg(any(test, feature = "test-support"))]
#[derive(Debug, Clone, Default)]
pub struct FixedDirs {
    dirs: HashMap<DirKind, PathBuf>,
}

#[cfg(any(test, feature = "test-support"))]
impl FixedDirs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, kind: DirKind, path: impl Into<PathBuf>) -> &mut Self {
        self.dirs.insert(kind, path.into());
        self
    }

    pub fn unset(&mut self, kind: DirKind) -> &mut Self {
        self.dirs.remove(&kind);
        self
    }

    pub fn clear(&mut self) -> &mut Self {
        self.dirs.clear();
        self
    }

    pub fn resolve(&self, kind: DirKind) -> Option<PathBuf> {
        self.dirs.get(&kind).cloned()
    }
}

#[cfg(any(test, feature = "test-support"))]
impl_dir_traits!([] FixedDirs);

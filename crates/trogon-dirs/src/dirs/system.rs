use std::path::PathBuf;

use super::{DirKind, PlatformDirs, Resolution};

/// Zero-sized type — resolves against the host OS, the live process
/// environment and the real filesystem on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemDirs;

impl SystemDirs {
    #[inline]
    pub fn resolve(&self, kind: DirKind) -> Option<PathBuf> {
        PlatformDirs::system().resolve(kind)
    }

    pub fn resolve_all(&self) -> Vec<Resolution> {
        PlatformDirs::system().resolve_all()
    }
}

impl_dir_traits!([] SystemDirs);

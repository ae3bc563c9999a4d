use std::path::PathBuf;

/// Scratch space; not guaranteed to survive a reboot.
pub trait TmpDir {
    fn tmp_dir(&self) -> Option<PathBuf>;
}

use std::path::PathBuf;

/// Per-user directory for installed binaries. Only XDG platforms have one.
pub trait ExecutableDir {
    fn executable_dir(&self) -> Option<PathBuf>;
}

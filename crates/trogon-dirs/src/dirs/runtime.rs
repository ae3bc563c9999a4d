use std::path::PathBuf;

/// Sockets, pipes and lock files. Only ever taken from `XDG_RUNTIME_DIR`.
pub trait RuntimeDir {
    fn runtime_dir(&self) -> Option<PathBuf>;
}

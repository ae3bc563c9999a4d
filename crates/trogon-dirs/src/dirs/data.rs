use std::path::PathBuf;

/// Application data that should survive cache cleanups.
pub trait DataDir {
    fn data_dir(&self) -> Option<PathBuf>;
}

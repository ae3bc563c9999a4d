use std::path::PathBuf;

/// Non-essential data that can be deleted and regenerated.
pub trait CacheDir {
    fn cache_dir(&self) -> Option<PathBuf>;
}

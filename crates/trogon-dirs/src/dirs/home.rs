use std::path::PathBuf;

/// The user's home directory, taken from the environment only.
pub trait HomeDir {
    fn home_dir(&self) -> Option<PathBuf>;
}

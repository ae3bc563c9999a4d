use std::path::PathBuf;

/// User configuration. Roams with the profile on Windows.
pub trait ConfigDir {
    fn config_dir(&self) -> Option<PathBuf>;
}

use std::path::PathBuf;

/// `~/Library/Preferences` on macOS, the config directory everywhere else.
pub trait PreferenceDir {
    fn preference_dir(&self) -> Option<PathBuf>;
}

use std::path::PathBuf;

/// Machine-local application data. Note Windows answers with `APPDATA`.
pub trait DataLocalDir {
    fn data_local_dir(&self) -> Option<PathBuf>;
}

use std::path::PathBuf;

pub trait ConfigLocalDir {
    fn config_local_dir(&self) -> Option<PathBuf>;
}

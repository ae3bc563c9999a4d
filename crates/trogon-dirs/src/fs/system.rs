use std::path::Path;

use super::ExistsDir;

/// Zero-sized type — delegates to `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemFs;

impl ExistsDir for SystemFs {
    #[inline]
    fn is_dir(&self, path: &Path) -> bool {
        match std::fs::metadata(path) {
            Ok(meta) => meta.is_dir(),
            Err(e) => {
                tracing::trace!(path = %path.display(), error = %e, "Directory check failed");
                false
            }
        }
    }
}

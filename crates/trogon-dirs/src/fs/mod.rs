//! Directory-existence checks behind a trait.
//!
//! # Examples
//!
//! ```
//! use trogon_dirs::fs::{ExistsDir, SystemFs};
//! use std::path::Path;
//!
//! fn usable<F: ExistsDir>(fs: &F, path: &Path) -> bool {
//!     fs.is_dir(path)
//! }
//!
//! let _ = usable(&SystemFs, Path::new("/tmp"));
//! ```
//!
//! ```ignore
//! use trogon_dirs::fs::{ExistsDir, MemFs};
//! use std::path::Path;
//!
//! let fs = MemFs::with_dirs(["/tmp"]);
//! assert!(usable(&fs, Path::new("/tmp")));
//! ```

mod exists_dir;
mod mem;
mod system;

pub use exists_dir::ExistsDir;
#[cfg(any(test, feature = "test-support"))]
pub use mem::MemFs;
pub use system::SystemFs;

//! Platform base-directory resolution for TrogonStack projects.
//!
//! Every lookup is a pure function of an [`OsFamily`], an environment
//! ([`ReadEnv`]) and a directory-existence check ([`ExistsDir`]). Candidates
//! are tried in priority order and the first existing directory wins; when
//! none exists the answer is `None`, never an error.
//!
//! # Quick Start
//!
//! | Concern | Trait(s) | Production | Test |
//! |---------|----------|------------|------|
//! | Env vars | [`ReadEnv`] | [`SystemEnv`] | [`InMemoryEnv`]* |
//! | Directory checks | [`ExistsDir`] | [`SystemFs`] | [`MemFs`]* |
//! | Warnings | [`DiagnosticSink`] | [`TracingDiagnostics`] | [`RecordedDiagnostics`]* |
//! | Directories | [`CacheDir`], [`ConfigDir`], … | [`SystemDirs`] | [`FixedDirs`]* |
//!
//! *Available with `#[cfg(test)]` or the `"test-support"` feature.
//!
//! ```
//! use trogon_dirs::{CacheDir, SystemDirs};
//!
//! let cache = SystemDirs.cache_dir().map(|d| d.join("myapp"));
//! ```
//!
//! Emulating another host:
//!
//! ```
//! use trogon_dirs::{DirKind, OsFamily, PlatformDirs, SystemEnv, SystemFs, TracingDiagnostics};
//!
//! let mac = PlatformDirs::new(OsFamily::MacOs, SystemEnv, SystemFs, TracingDiagnostics);
//! let _prefs = mac.resolve(DirKind::Preference);
//! ```
//!
//! # Thread Safety
//!
//! Production types are zero-sized and trivially `Send + Sync`. The test
//! doubles are `RefCell`-backed and are not `Sync`.
//!
//! | Test type | Backing | `Send + Sync` |
//! |-----------|---------|---------------|
//! | [`InMemoryEnv`] | `RefCell<HashMap>` | No |
//! | [`MemFs`] | `RefCell<HashSet>` | No |
//! | [`RecordedDiagnostics`] | `RefCell<Vec>` | No |
//! | [`FixedDirs`] | `HashMap` | Yes |

pub mod diag;
pub mod dirs;
pub mod env;
pub mod error;
pub mod fs;
pub mod os;

#[cfg(any(test, feature = "test-support"))]
pub use diag::RecordedDiagnostics;
pub use diag::{DiagnosticSink, TracingDiagnostics};
#[cfg(any(test, feature = "test-support"))]
pub use dirs::FixedDirs;
pub use dirs::{
    CacheDir, ConfigDir, ConfigLocalDir, DataDir, DataLocalDir, DirKind, ExecutableDir, HomeDir,
    PlatformDirs, PreferenceDir, Resolution, RuntimeDir, StateDir, SystemDirs, TmpDir,
    first_existing_dir, first_existing_env_dir,
};
#[cfg(any(test, feature = "test-support"))]
pub use env::InMemoryEnv;
pub use env::{ReadEnv, SystemEnv};
pub use error::{Error, Result};
#[cfg(any(test, feature = "test-support"))]
pub use fs::MemFs;
pub use fs::{ExistsDir, SystemFs};
pub use os::{OsFamily, PolicyGroup};

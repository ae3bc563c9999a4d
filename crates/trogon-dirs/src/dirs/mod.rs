//! Platform directory resolution.
//!
//! Each category is its own single-method trait so code can ask for only the
//! directory it needs. [`PlatformDirs`] answers all of them from one
//! decision table keyed by category and [`PolicyGroup`](crate::os::PolicyGroup);
//! [`SystemDirs`] is the zero-sized production instance.
//!
//! # Examples
//!
//! ```
//! use trogon_dirs::dirs::{RuntimeDir, SystemDirs};
//!
//! fn socket_path<D: RuntimeDir>(dirs: &D, app: &str) -> Option<std::path::PathBuf> {
//!     dirs.runtime_dir().map(|d| d.join(app).with_extension("sock"))
//! }
//!
//! let _sock = socket_path(&SystemDirs, "myapp");
//! ```
//!
//! ```ignore
//! use trogon_dirs::dirs::{DirKind, FixedDirs, RuntimeDir};
//!
//! let mut dirs = FixedDirs::new();
//! dirs.set(DirKind::Runtime, "/run/user/1000");
//!
//! assert_eq!(
//!     socket_path(&dirs, "myapp"),
//!     Some(std::path::PathBuf::from("/run/user/1000/myapp.sock")),
//! );
//! ```

/// Implements all eleven directory traits by delegating to an inherent
/// `resolve(DirKind)` on the target type.
macro_rules! impl_dir_traits {
    ([$($generics:tt)*] $ty:ty) => {
        impl_dir_traits!(@one [$($generics)*] $ty, TmpDir, tmp_dir, Tmp);
        impl_dir_traits!(@one [$($generics)*] $ty, HomeDir, home_dir, Home);
        impl_dir_traits!(@one [$($generics)*] $ty, CacheDir, cache_dir, Cache);
        impl_dir_traits!(@one [$($generics)*] $ty, ConfigDir, config_dir, Config);
        impl_dir_traits!(@one [$($generics)*] $ty, ConfigLocalDir, config_local_dir, ConfigLocal);
        impl_dir_traits!(@one [$($generics)*] $ty, DataDir, data_dir, Data);
        impl_dir_traits!(@one [$($generics)*] $ty, DataLocalDir, data_local_dir, DataLocal);
        impl_dir_traits!(@one [$($generics)*] $ty, ExecutableDir, executable_dir, Executable);
        impl_dir_traits!(@one [$($generics)*] $ty, PreferenceDir, preference_dir, Preference);
        impl_dir_traits!(@one [$($generics)*] $ty, RuntimeDir, runtime_dir, Runtime);
        impl_dir_traits!(@one [$($generics)*] $ty, StateDir, state_dir, State);
    };
    (@one [$($generics:tt)*] $ty:ty, $trait:ident, $method:ident, $kind:ident) => {
        impl<$($generics)*> $crate::dirs::$trait for $ty {
            #[inline]
            fn $method(&self) -> Option<::std::path::PathBuf> {
                self.resolve($crate::dirs::DirKind::$kind)
            }
        }
    };
}

mod cache;
mod config;
mod config_local;
mod data;
mod data_local;
mod executable;
pub mod fallback;
mod fixed;
mod home;
mod kind;
mod platform;
mod policy;
mod preference;
mod runtime;
mod state;
mod system;
mod tmp;

pub use cache::CacheDir;
pub use config::ConfigDir;
pub use config_local::ConfigLocalDir;
pub use data::DataDir;
pub use data_local::DataLocalDir;
pub use executable::ExecutableDir;
pub use fallback::{first_existing_dir, first_existing_env_dir};
#[cfg(any(test, feature = "test-support"))]
pub use fixed::FixedDirs;
pub use home::HomeDir;
pub use kind::DirKind;
pub use platform::{PlatformDirs, Resolution};
pub use preference::PreferenceDir;
pub use runtime::RuntimeDir;
pub use state::StateDir;
pub use system::SystemDirs;
pub use tmp::TmpDir;

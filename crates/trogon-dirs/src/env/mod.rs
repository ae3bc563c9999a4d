//! Environment variable access behind a trait.
//!
//! # Examples
//!
//! ```
//! use trogon_dirs::env::{ReadEnv, SystemEnv};
//!
//! fn has_xdg_runtime<E: ReadEnv>(env: &E) -> bool {
//!     env.var_os("XDG_RUNTIME_DIR").is_some()
//! }
//!
//! let _ = has_xdg_runtime(&SystemEnv);
//! ```
//!
//! ```ignore
//! use trogon_dirs::env::{ReadEnv, InMemoryEnv};
//!
//! let env = InMemoryEnv::new();
//! env.set("XDG_RUNTIME_DIR", "/run/user/1000"); // &self — no `mut` needed
//!
//! assert!(has_xdg_runtime(&env));
//! ```

mod in_memory;
mod read_env;
mod system;

#[cfg(any(test, feature = "test-support"))]
pub use in_memory::InMemoryEnv;
pub use read_env::ReadEnv;
pub use system::SystemEnv;

use std::ffi::OsString;

use super::ReadEnv;

/// Zero-sized type — reads the live process environment on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl ReadEnv for SystemEnv {
    #[inline]
    fn var_os(&self, key: &str) -> Option<OsString> {
        std::env::var_os(key)
    }
}

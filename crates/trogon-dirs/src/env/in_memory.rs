#[cfg(any(test, feature = "test-support"))]
use std::cell::RefCell;
#[cfg(any(test, feature = "test-support"))]
use std::collections::HashMap;
#[cfg(any(test, feature = "test-support"))]
use std::ffi::OsString;

#[cfg(any(test, feature = "test-support"))]
use super::ReadEnv;

/// Scripted environment snapshot. Won't touch the global process environment.
///
/// Uses `RefCell` for interior mutability — all methods take `&self`,
/// consistent with [`MemFs`](crate::fs::MemFs).
///
/// Keys are case-sensitive on every platform, unlike the real Windows
/// environment.
#[cfg(any(test, feature = "test-support"))]
#[derive(Debug)]
pub struct InMemoryEnv {
    vars: RefCell<HashMap<String, OsString>>,
}

#[cfg(any(test, feature = "test-support"))]
impl InMemoryEnv {
    pub fn new() -> Self {
        Self {
            vars: RefCell::new(HashMap::new()),
        }
    }

    pub fn set(&self, key: impl Into<String>, value: impl Into<OsString>) -> &Self {
        self.vars.borrow_mut().insert(key.into(), value.into());
        self
    }

    pub fn remove(&self, key: &str) {
        self.vars.borrow_mut().remove(key);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.vars.borrow().contains_key(key)
    }

    pub fn clear(&self) {
        self.vars.borrow_mut().clear();
    }
}

#[cfg(any(test, feature = "test-support"))]
impl Default for InMemoryEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(any(test, feature = "test-support"))]
impl ReadEnv for InMemoryEnv {
    fn var_os(&self, key: &str) -> Option<OsString> {
        self.vars.borrow().get(key).cloned()
    }
}

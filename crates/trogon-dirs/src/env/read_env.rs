use std::ffi::OsString;

/// Looks up a single environment variable.
///
/// `None` means the variable is unset. A variable set to the empty string is
/// `Some("")`; callers decide whether that counts.
///
/// # Thread Safety
///
/// Does **not** require `Send + Sync`. Add the bounds at your call site:
///
/// ```ignore
/// fn resolve_in_worker<E: ReadEnv + Send + Sync + 'static>(env: Arc<E>) { … }
/// ```
pub trait ReadEnv {
    fn var_os(&self, key: &str) -> Option<OsString>;
}

impl<T: ReadEnv + ?Sized> ReadEnv for &T {
    #[inline]
    fn var_os(&self, key: &str) -> Option<OsString> {
        (**self).var_os(key)
    }
}

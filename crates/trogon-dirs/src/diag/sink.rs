/// Write-only channel for human-readable warnings raised while resolving.
///
/// Nothing a sink does may influence a resolution result.
pub trait DiagnosticSink {
    fn warn(&self, message: &str);
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for &T {
    #[inline]
    fn warn(&self, message: &str) {
        (**self).warn(message)
    }
}

//! Where resolver warnings go.
//!
//! Production code uses [`TracingDiagnostics`]; tests swap in
//! [`RecordedDiagnostics`]* to count and inspect warnings without capturing
//! process output.
//!
//! *Available with `#[cfg(test)]` or the `"test-support"` feature.

mod recorded;
mod sink;
mod traced;

#[cfg(any(test, feature = "test-support"))]
pub use recorded::RecordedDiagnostics;
pub use sink::DiagnosticSink;
pub use traced::TracingDiagnostics;

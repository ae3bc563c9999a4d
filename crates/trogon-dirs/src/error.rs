//! Error types for trogon-dirs

use thiserror::Error;

use crate::dirs::DirKind;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Resolution itself never fails; these are for callers that want `?`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("no {0} directory could be resolved")]
    Unresolved(DirKind),

    #[error("unknown directory kind: {0:?}")]
    UnknownDirKind(String),
}

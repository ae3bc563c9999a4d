use std::path::PathBuf;

use serde::Serialize;

use super::DirKind;
use super::fallback::first_existing_dir;
use super::policy::{self, Rule};
use crate::diag::{DiagnosticSink, TracingDiagnostics};
use crate::env::{ReadEnv, SystemEnv};
use crate::error::{Error, Result};
use crate::fs::{ExistsDir, SystemFs};
use crate::os::OsFamily;

/// Resolves every [`DirKind`] for one OS family against injected
/// collaborators.
///
/// Nothing is cached: each call reads the environment and checks the
/// filesystem again.
#[derive(Debug, Clone)]
pub struct PlatformDirs<E = SystemEnv, F = SystemFs, D = TracingDiagnostics> {
    os: OsFamily,
    env: E,
    fs: F,
    diag: D,
}

/// One row of [`PlatformDirs::resolve_all`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub kind: DirKind,
    pub path: Option<PathBuf>,
}

impl PlatformDirs {
    /// The host OS, the live process environment and the real filesystem.
    pub fn system() -> Self {
        Self::new(OsFamily::current(), SystemEnv, SystemFs, TracingDiagnostics)
    }
}

impl<E, F, D> PlatformDirs<E, F, D> {
    pub fn new(os: OsFamily, env: E, fs: F, diag: D) -> Self {
        Self { os, env, fs, diag }
    }

    pub fn os(&self) -> &OsFamily {
        &self.os
    }
}

impl<E: ReadEnv, F: ExistsDir, D: DiagnosticSink> PlatformDirs<E, F, D> {
    pub fn resolve(&self, kind: DirKind) -> Option<PathBuf> {
        self.resolve_as(kind, kind)
    }

    /// Like [`resolve`](Self::resolve), for callers that cannot continue
    /// without the directory.
    pub fn require(&self, kind: DirKind) -> Result<PathBuf> {
        self.resolve(kind).ok_or(Error::Unresolved(kind))
    }

    pub fn resolve_all(&self) -> Vec<Resolution> {
        DirKind::ALL
            .into_iter()
            .map(|kind| Resolution {
                kind,
                path: self.resolve(kind),
            })
            .collect()
    }

    // `requested` is what the caller asked for, `kind` is where the alias
    // chain currently points.
    fn resolve_as(&self, requested: DirKind, kind: DirKind) -> Option<PathBuf> {
        match policy::rule(kind, self.os.policy_group()) {
            Rule::Candidates(candidates) => {
                let resolved = first_existing_dir(
                    &self.fs,
                    candidates.iter().filter_map(|c| c.build(&self.env)),
                );
                tracing::debug!(
                    kind = %requested,
                    os = %self.os,
                    path = ?resolved,
                    "Resolved directory"
                );
                resolved
            }
            Rule::SameAs(alias) => self.resolve_as(requested, alias),
            Rule::NotApplicable => {
                tracing::debug!(kind = %requested, os = %self.os, "Directory not applicable");
                None
            }
            Rule::Unsupported => {
                self.diag.warn(&format!(
                    "cannot resolve {requested} directory: unsupported operating system {:?}",
                    self.os.name()
                ));
                None
            }
        }
    }
}

impl_dir_traits!([E: ReadEnv, F: ExistsDir, D: DiagnosticSink] PlatformDirs<E, F, D>);

//! First-existing-directory selection over an ordered candidate list.

use std::path::PathBuf;

use crate::env::ReadEnv;
use crate::fs::ExistsDir;

/// Returns the first candidate that is non-empty and an existing directory.
///
/// Candidates are consumed lazily and checked in order, so earlier entries
/// win and nothing after the match is touched. An exhausted list is `None`,
/// which is an ordinary outcome rather than an error.
pub fn first_existing_dir<F, I>(fs: &F, candidates: I) -> Option<PathBuf>
where
    F: ExistsDir + ?Sized,
    I: IntoIterator,
    I::Item: Into<PathBuf>,
{
    candidates.into_iter().map(Into::into).find(|candidate| {
        if candidate.as_os_str().is_empty() {
            tracing::trace!("Skipping empty candidate");
            return false;
        }
        let exists = fs.is_dir(candidate);
        tracing::trace!(candidate = %candidate.display(), exists, "Checked candidate");
        exists
    })
}

/// Looks each variable up in `env`, drops the unset ones and delegates to
/// [`first_existing_dir`].
pub fn first_existing_env_dir<E, F>(env: &E, fs: &F, names: &[&str]) -> Option<PathBuf>
where
    E: ReadEnv + ?Sized,
    F: ExistsDir + ?Sized,
{
    first_existing_dir(
        fs,
        names
            .iter()
            .filter_map(|name| env.var_os(name))
            .map(PathBuf::from),
    )
}

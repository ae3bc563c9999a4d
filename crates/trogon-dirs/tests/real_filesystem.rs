//! Resolution against real directories created under a temp dir, with a
//! scripted environment.

use std::path::Path;

use trogon_dirs::{
    DirKind, Error, InMemoryEnv, OsFamily, PlatformDirs, RecordedDiagnostics, SystemFs,
};

fn linux<'a>(
    env: &'a InMemoryEnv,
    diag: &'a RecordedDiagnostics,
) -> PlatformDirs<&'a InMemoryEnv, SystemFs, &'a RecordedDiagnostics> {
    PlatformDirs::new(OsFamily::Linux, env, SystemFs, diag)
}

fn env_with_home(home: &Path) -> InMemoryEnv {
    let env = InMemoryEnv::new();
    env.set("HOME", home.as_os_str());
    env
}

#[test]
fn resolves_created_xdg_layout() {
    let home = tempfile::tempdir().unwrap();
    for sub in [".cache", ".config", ".local/share", ".local/state", ".local/bin"] {
        std::fs::create_dir_all(home.path().join(sub)).unwrap();
    }
    let env = env_with_home(home.path());
    let diag = RecordedDiagnostics::new();
    let dirs = linux(&env, &diag);

    assert_eq!(dirs.resolve(DirKind::Home), Some(home.path().to_path_buf()));
    assert_eq!(dirs.resolve(DirKind::Cache), Some(home.path().join(".cache")));
    assert_eq!(dirs.resolve(DirKind::Config), Some(home.path().join(".config")));
    assert_eq!(
        dirs.resolve(DirKind::Data),
        Some(home.path().join(".local").join("share"))
    );
    assert_eq!(
        dirs.resolve(DirKind::State),
        Some(home.path().join(".local").join("state"))
    );
    assert_eq!(
        dirs.resolve(DirKind::Executable),
        Some(home.path().join(".local").join("bin"))
    );
    assert!(diag.is_empty());
}

#[test]
fn missing_directories_are_not_resolved() {
    let home = tempfile::tempdir().unwrap();
    let env = env_with_home(home.path());
    let diag = RecordedDiagnostics::new();
    let dirs = linux(&env, &diag);

    assert_eq!(dirs.resolve(DirKind::Cache), None);
    assert_eq!(dirs.require(DirKind::Cache), Err(Error::Unresolved(DirKind::Cache)));
}

#[test]
fn regular_file_is_not_a_directory() {
    let home = tempfile::tempdir().unwrap();
    std::fs::write(home.path().join(".cache"), "not a dir").unwrap();
    let env = env_with_home(home.path());
    let diag = RecordedDiagnostics::new();

    assert_eq!(linux(&env, &diag).resolve(DirKind::Cache), None);
}

#[test]
fn xdg_override_pointing_at_real_dir_wins() {
    let home = tempfile::tempdir().unwrap();
    let custom = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(home.path().join(".cache")).unwrap();
    let env = env_with_home(home.path());
    env.set("XDG_CACHE_HOME", custom.path().as_os_str());
    let diag = RecordedDiagnostics::new();

    assert_eq!(
        linux(&env, &diag).resolve(DirKind::Cache),
        Some(custom.path().to_path_buf())
    );
}

//! The decision table: which candidates each category tries on each
//! [`PolicyGroup`].
//!
//! | Category     | Windows                       | macOS                           | XDG (Linux/BSD/SunOS/AIX)                                  | Unsupported |
//! |--------------|-------------------------------|---------------------------------|------------------------------------------------------------|-------------|
//! | tmp          | `$TMPDIR`,`$TEMP`,`$TMP`, `C:\TEMP`, `C:\TMP`, `\TEMP`, `\TMP` | `$TMPDIR`,`$TEMP`,`$TMP`, `/tmp`, `/var/tmp`, `/usr/tmp` | as macOS | warn |
//! | home         | `$UserProfile`, `$Profile`    | `$HOME`                         | `$HOME`                                                    | warn        |
//! | cache        | `$APPDATA`                    | `$HOME/Library/Caches`          | `$XDG_CACHE_HOME`, `$HOME/.cache`                          | warn        |
//! | config       | `$APPDATA`                    | `$HOME/Library/Application Support` | `$XDG_CONFIG_HOME`, `$HOME/.config`                    | warn        |
//! | config_local | `$LOCALAPPDATA`               | = config                        | = config                                                   | = config    |
//! | data         | = config                      | = config                        | `$XDG_DATA_HOME`, `$HOME/.local/share`                     | = config    |
//! | data_local   | `$APPDATA`                    | = data                          | = data                                                     | = data      |
//! | executable   | none                          | none                            | `$XDG_BIN_HOME`, `$HOME/.local/bin`, `$XDG_DATA_HOME/../bin` | warn      |
//! | preference   | = config                      | `$HOME/Library/Preferences`     | = config                                                   | = config    |
//! | runtime      | none                          | none                            | `$XDG_RUNTIME_DIR`                                         | warn        |
//! | state        | none                          | none                            | `$XDG_STATE_HOME`, `$HOME/.local/state`                    | warn        |

use std::path::PathBuf;

use super::DirKind;
use crate::env::ReadEnv;
use crate::os::PolicyGroup;

/// One entry of a candidate list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Candidate {
    /// The value of an environment variable, used as-is.
    Env(&'static str),
    Literal(&'static str),
    /// `base` variable joined with each `suffix` component.
    ///
    /// Dropped when `base` is unset or empty, so a missing `HOME` never turns
    /// into a root-relative `/.cache`.
    Derived {
        base: &'static str,
        suffix: &'static [&'static str],
    },
}

impl Candidate {
    pub(crate) fn build<E: ReadEnv + ?Sized>(&self, env: &E) -> Option<PathBuf> {
        match *self {
            Self::Env(name) => env.var_os(name).map(PathBuf::from),
            Self::Literal(path) => Some(PathBuf::from(path)),
            Self::Derived { base, suffix } => {
                let Some(prefix) = env.var_os(base).filter(|v| !v.is_empty()) else {
                    tracing::debug!(base, "Dropping derived candidate, base variable unset");
                    return None;
                };
                Some(
                    suffix
                        .iter()
                        .fold(PathBuf::from(prefix), |path, part| path.join(part)),
                )
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Rule {
    Candidates(&'static [Candidate]),
    /// Resolve exactly as another category does on the same group.
    SameAs(DirKind),
    /// The category has no meaning here; quietly unresolved.
    NotApplicable,
    /// The OS is not in the table; warn and leave unresolved.
    Unsupported,
}

use Candidate::{Derived, Env, Literal};

const WINDOWS_TMP: &[Candidate] = &[
    Env("TMPDIR"),
    Env("TEMP"),
    Env("TMP"),
    Literal(r"C:\TEMP"),
    Literal(r"C:\TMP"),
    Literal(r"\TEMP"),
    Literal(r"\TMP"),
];
const UNIX_TMP: &[Candidate] = &[
    Env("TMPDIR"),
    Env("TEMP"),
    Env("TMP"),
    Literal("/tmp"),
    Literal("/var/tmp"),
    Literal("/usr/tmp"),
];

const WINDOWS_HOME: &[Candidate] = &[Env("UserProfile"), Env("Profile")];
const UNIX_HOME: &[Candidate] = &[Env("HOME")];

const WINDOWS_ROAMING: &[Candidate] = &[Env("APPDATA")];
const WINDOWS_LOCAL: &[Candidate] = &[Env("LOCALAPPDATA")];

const MACOS_CACHE: &[Candidate] = &[Derived {
    base: "HOME",
    suffix: &["Library", "Caches"],
}];
const MACOS_CONFIG: &[Candidate] = &[Derived {
    base: "HOME",
    suffix: &["Library", "Application Support"],
}];
const MACOS_PREFERENCE: &[Candidate] = &[Derived {
    base: "HOME",
    suffix: &["Library", "Preferences"],
}];

const XDG_CACHE: &[Candidate] = &[
    Env("XDG_CACHE_HOME"),
    Derived {
        base: "HOME",
        suffix: &[".cache"],
    },
];
const XDG_CONFIG: &[Candidate] = &[
    Env("XDG_CONFIG_HOME"),
    Derived {
        base: "HOME",
        suffix: &[".config"],
    },
];
const XDG_DATA: &[Candidate] = &[
    Env("XDG_DATA_HOME"),
    Derived {
        base: "HOME",
        suffix: &[".local", "share"],
    },
];
const XDG_EXECUTABLE: &[Candidate] = &[
    Env("XDG_BIN_HOME"),
    Derived {
        base: "HOME",
        suffix: &[".local", "bin"],
    },
    Derived {
        base: "XDG_DATA_HOME",
        suffix: &["..", "bin"],
    },
];
const XDG_RUNTIME: &[Candidate] = &[Env("XDG_RUNTIME_DIR")];
const XDG_STATE: &[Candidate] = &[
    Env("XDG_STATE_HOME"),
    Derived {
        base: "HOME",
        suffix: &[".local", "state"],
    },
];

pub(crate) fn rule(kind: DirKind, group: PolicyGroup) -> Rule {
    use PolicyGroup::{MacOs, Unsupported, Windows, Xdg};
    use Rule::{Candidates, NotApplicable, SameAs};

    match kind {
        DirKind::Tmp => match group {
            Windows => Candidates(WINDOWS_TMP),
            MacOs | Xdg => Candidates(UNIX_TMP),
            Unsupported => Rule::Unsupported,
        },
        DirKind::Home => match group {
            Windows => Candidates(WINDOWS_HOME),
            MacOs | Xdg => Candidates(UNIX_HOME),
            Unsupported => Rule::Unsupported,
        },
        DirKind::Cache => match group {
            Windows => Candidates(WINDOWS_ROAMING),
            MacOs => Candidates(MACOS_CACHE),
            Xdg => Candidates(XDG_CACHE),
            Unsupported => Rule::Unsupported,
        },
        DirKind::Config => match group {
            Windows => Candidates(WINDOWS_ROAMING),
            MacOs => Candidates(MACOS_CONFIG),
            Xdg => Candidates(XDG_CONFIG),
            Unsupported => Rule::Unsupported,
        },
        DirKind::ConfigLocal => match group {
            Windows => Candidates(WINDOWS_LOCAL),
            MacOs | Xdg | Unsupported => SameAs(DirKind::Config),
        },
        DirKind::Data => match group {
            Xdg => Candidates(XDG_DATA),
            Windows | MacOs | Unsupported => SameAs(DirKind::Config),
        },
        DirKind::DataLocal => match group {
            Windows => Candidates(WINDOWS_ROAMING),
            MacOs | Xdg | Unsupported => SameAs(DirKind::Data),
        },
        DirKind::Executable => match group {
            Windows | MacOs => NotApplicable,
            Xdg => Candidates(XDG_EXECUTABLE),
            Unsupported => Rule::Unsupported,
        },
        DirKind::Preference => match group {
            MacOs => Candidates(MACOS_PREFERENCE),
            Windows | Xdg | Unsupported => SameAs(DirKind::Config),
        },
        DirKind::Runtime => match group {
            Windows | MacOs => NotApplicable,
            Xdg => Candidates(XDG_RUNTIME),
            Unsupported => Rule::Unsupported,
        },
        DirKind::State => match group {
            Windows | MacOs => NotApplicable,
            Xdg => Candidates(XDG_STATE),
            Unsupported => Rule::Unsupported,
        },
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::env::InMemoryEnv;

    const GROUPS: [PolicyGroup; 4] = [
        PolicyGroup::Windows,
        PolicyGroup::MacOs,
        PolicyGroup::Xdg,
        PolicyGroup::Unsupported,
    ];

    #[test]
    fn aliases_always_terminate_in_candidates_or_a_stop() {
        for group in GROUPS {
            for kind in DirKind::ALL {
                let mut current = kind;
                let mut hops = 0;
                while let Rule::SameAs(next) = rule(current, group) {
                    current = next;
                    hops += 1;
                    assert!(hops < DirKind::ALL.len(), "{kind} loops on {group:?}");
                }
            }
        }
    }

    #[test]
    fn unsupported_group_never_lists_candidates() {
        for kind in DirKind::ALL {
            assert!(!matches!(
                rule(kind, PolicyGroup::Unsupported),
                Rule::Candidates(_)
            ));
        }
    }

    #[test]
    fn only_xdg_group_has_runtime_state_and_executable() {
        for kind in [DirKind::Executable, DirKind::Runtime, DirKind::State] {
            assert_eq!(rule(kind, PolicyGroup::Windows), Rule::NotApplicable);
            assert_eq!(rule(kind, PolicyGroup::MacOs), Rule::NotApplicable);
            assert!(matches!(rule(kind, PolicyGroup::Xdg), Rule::Candidates(_)));
        }
    }

    #[test]
    fn env_candidate_keeps_empty_value() {
        let env = InMemoryEnv::new();
        env.set("TMPDIR", "");

        assert_eq!(Env("TMPDIR").build(&env), Some(PathBuf::new()));
        assert_eq!(Env("TEMP").build(&env), None);
    }

    #[test]
    fn literal_candidate_ignores_env() {
        let env = InMemoryEnv::new();
        assert_eq!(Literal("/tmp").build(&env), Some(PathBuf::from("/tmp")));
    }

    #[test]
    fn derived_candidate_joins_components() {
        let env = InMemoryEnv::new();
        env.set("HOME", "/home/alice");
        let candidate = Derived {
            base: "HOME",
            suffix: &[".local", "share"],
        };

        assert_eq!(
            candidate.build(&env),
            Some(Path::new("/home/alice").join(".local").join("share"))
        );
    }

    #[test]
    fn derived_candidate_without_base_is_dropped() {
        let env = InMemoryEnv::new();
        let candidate = Derived {
            base: "HOME",
            suffix: &[".cache"],
        };
        assert_eq!(candidate.build(&env), None);

        env.set("HOME", "");
        assert_eq!(candidate.build(&env), None);
    }
}

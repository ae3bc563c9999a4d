//! Operating-system identity.
//!
//! [`OsFamily`] is a plain value: detect it once with [`OsFamily::current`]
//! and hand it to [`PlatformDirs`](crate::PlatformDirs), or build any other
//! family to emulate a different host.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The operating-system families the decision table knows about.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum OsFamily {
    Windows,
    MacOs,
    Linux,
    FreeBsd,
    OpenBsd,
    SunOs,
    Aix,
    /// Anything else, carrying the name it was detected or parsed as.
    ///
    /// Build it through [`OsFamily::from_name`]. The name must be one
    /// `from_name` does not recognize: `Other("linux".into())` resolves as
    /// unsupported, yet serializes as `"linux"` and reads back as
    /// [`OsFamily::Linux`].
    Other(String),
}

/// Families that share one column of the decision table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyGroup {
    Windows,
    MacOs,
    /// Linux, the BSDs, SunOS and AIX: XDG variables with dot-directory
    /// fallbacks under `HOME`.
    Xdg,
    Unsupported,
}

impl OsFamily {
    /// The family of the host this binary was compiled for.
    pub fn current() -> Self {
        Self::from_name(std::env::consts::OS)
    }

    /// Maps an OS name (as in [`std::env::consts::OS`]) to a family.
    ///
    /// Matching ignores ASCII case. `solaris` and `illumos` are both SunOS.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "windows" => Self::Windows,
            "macos" => Self::MacOs,
            "linux" => Self::Linux,
            "freebsd" => Self::FreeBsd,
            "openbsd" => Self::OpenBsd,
            "sunos" | "solaris" | "illumos" => Self::SunOs,
            "aix" => Self::Aix,
            _ => Self::Other(name.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Windows => "windows",
            Self::MacOs => "macos",
            Self::Linux => "linux",
            Self::FreeBsd => "freebsd",
            Self::OpenBsd => "openbsd",
            Self::SunOs => "sunos",
            Self::Aix => "aix",
            Self::Other(name) => name,
        }
    }

    pub fn policy_group(&self) -> PolicyGroup {
        match self {
            Self::Windows => PolicyGroup::Windows,
            Self::MacOs => PolicyGroup::MacOs,
            Self::Linux | Self::FreeBsd | Self::OpenBsd | Self::SunOs | Self::Aix => {
                PolicyGroup::Xdg
            }
            Self::Other(_) => PolicyGroup::Unsupported,
        }
    }
}

impl fmt::Display for OsFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OsFamily {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

impl From<String> for OsFamily {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<OsFamily> for String {
    fn from(os: OsFamily) -> Self {
        os.name().to_string()
    }
}

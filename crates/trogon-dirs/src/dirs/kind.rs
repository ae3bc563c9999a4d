use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The directory categories a resolver answers for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DirKind {
    Tmp,
    Home,
    Cache,
    Config,
    ConfigLocal,
    Data,
    DataLocal,
    Executable,
    Preference,
    Runtime,
    State,
}

impl DirKind {
    pub const ALL: [DirKind; 11] = [
        DirKind::Tmp,
        DirKind::Home,
        DirKind::Cache,
        DirKind::Config,
        DirKind::ConfigLocal,
        DirKind::Data,
        DirKind::DataLocal,
        DirKind::Executable,
        DirKind::Preference,
        DirKind::Runtime,
        DirKind::State,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tmp => "tmp",
            Self::Home => "home",
            Self::Cache => "cache",
            Self::Config => "config",
            Self::ConfigLocal => "config_local",
            Self::Data => "data",
            Self::DataLocal => "data_local",
            Self::Executable => "executable",
            Self::Preference => "preference",
            Self::Runtime => "runtime",
            Self::State => "state",
        }
    }
}

impl fmt::Display for DirKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DirKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| Error::UnknownDirKind(s.to_string()))
    }
}

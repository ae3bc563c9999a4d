use std::io::{self, Write};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use serde::Serialize;
use trogon_dirs::{
    DirKind, OsFamily, PlatformDirs, Resolution, SystemEnv, SystemFs, TracingDiagnostics,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// Print the base directories this host would use.
#[derive(Debug, Parser)]
#[command(name = "trogon-dirs", version)]
struct Cli {
    /// Directory kinds to print (default: all).
    #[arg(value_name = "KIND")]
    kinds: Vec<DirKind>,

    /// Resolve as if running on this OS (e.g. linux, macos, windows).
    #[arg(long, env = "TROGON_DIRS_OS")]
    os: Option<OsFamily>,

    #[arg(long, value_enum, env = "TROGON_DIRS_FORMAT", default_value = "text")]
    format: Format,
}

#[derive(Debug, Serialize)]
struct Report {
    os: OsFamily,
    directories: Vec<Resolution>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let os = cli.os.unwrap_or_else(OsFamily::current);
    tracing::debug!(os = %os, "Resolving directories");

    let dirs = PlatformDirs::new(os.clone(), SystemEnv, SystemFs, TracingDiagnostics);
    let kinds = if cli.kinds.is_empty() {
        DirKind::ALL.to_vec()
    } else {
        cli.kinds
    };
    let directories = kinds
        .into_iter()
        .map(|kind| Resolution {
            kind,
            path: dirs.resolve(kind),
        })
        .collect();
    let report = Report { os, directories };

    let mut out = io::stdout().lock();
    match cli.format {
        Format::Text => write_text(&mut out, &report)?,
        Format::Json => {
            serde_json::to_writer_pretty(&mut out, &report).context("Failed to write JSON")?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn write_text(out: &mut impl Write, report: &Report) -> io::Result<()> {
    writeln!(out, "os: {}", report.os)?;
    for Resolution { kind, path } in &report.directories {
        match path {
            Some(path) => writeln!(out, "{:<13}{}", kind.as_str(), path.display())?,
            None => writeln!(out, "{:<13}-", kind.as_str())?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn parses_kinds_and_os() {
        let cli = Cli::try_parse_from(["trogon-dirs", "--os", "freebsd", "cache", "state"]).unwrap();

        assert_eq!(cli.os, Some(OsFamily::FreeBsd));
        assert_eq!(cli.kinds, vec![DirKind::Cache, DirKind::State]);
        assert_eq!(cli.format, Format::Text);
    }

    #[test]
    fn rejects_unknown_kind() {
        assert!(Cli::try_parse_from(["trogon-dirs", "music"]).is_err());
    }

    #[test]
    fn unknown_os_is_accepted_as_other() {
        let cli = Cli::try_parse_from(["trogon-dirs", "--os", "plan9"]).unwrap();
        assert_eq!(cli.os, Some(OsFamily::Other("plan9".into())));
    }

    #[test]
    fn text_output_marks_unresolved_with_dash() {
        let report = Report {
            os: OsFamily::Linux,
            directories: vec![
                Resolution {
                    kind: DirKind::Tmp,
                    path: Some(PathBuf::from("/tmp")),
                },
                Resolution {
                    kind: DirKind::Runtime,
                    path: None,
                },
            ],
        };
        let mut buf = Vec::new();
        write_text(&mut buf, &report).unwrap();

        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "os: linux\ntmp          /tmp\nruntime      -\n"
        );
    }

    #[test]
    fn json_output_uses_snake_case_kinds() {
        let report = Report {
            os: OsFamily::MacOs,
            directories: vec![Resolution {
                kind: DirKind::ConfigLocal,
                path: None,
            }],
        };
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["os"], "macos");
        assert_eq!(json["directories"][0]["kind"], "config_local");
        assert!(json["directories"][0]["path"].is_null());
    }
}

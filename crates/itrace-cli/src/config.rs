use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use itrace_recorder::engine::Arch;
use miette::IntoDiagnostic;

/// Configuration of a trace session.
#[derive(Debug, PartialEq, knus::Decode)]
pub struct SessionConfig {
    /// Architecture of the traced process (`arm` or `aarch64`).
    #[knus(child, unwrap(argument))]
    pub arch: Option<String>,

    /// Directory the session directory is created in.
    #[knus(child, unwrap(argument))]
    pub dump_root: Option<String>,

    /// Whether trace lines are shipped to the system log.
    #[knus(child, default = true, unwrap(argument))]
    pub log_sink: bool,

    /// Whether trace lines are written to the session's trace file.
    #[knus(child, default = false, unwrap(argument))]
    pub file_sink: bool,

    /// Whether memory blocks are dumped to the session's dump file.
    #[knus(child, default = false, unwrap(argument))]
    pub memory_dump: bool,
}

impl SessionConfig {
    /// Parses a configuration, either inline or from a `.kdl` file.
    pub fn parse(config: &str) -> miette::Result<Self> {
        let path = Path::new(config);

        let config = if let Some((filename, "kdl")) = path
            .file_name()
            .and_then(OsStr::to_str)
            .zip(path.extension().and_then(OsStr::to_str))
        {
            let content = std::fs::read_to_string(path).into_diagnostic()?;
            knus::parse(filename, &content)?
        } else {
            knus::parse("<content>", config)?
        };

        Ok(config)
    }

    /// Architecture of the traced process.
    ///
    /// `arch` takes precedence over the configured architecture, which
    /// defaults to the architecture of this binary (or AArch64, if it's not
    /// supported).
    pub fn arch(&self, arch: Option<Arch>) -> miette::Result<Arch> {
        match (arch, self.arch.as_deref()) {
            (Some(arch), _) => Ok(arch),
            (None, Some(name)) => name.parse().into_diagnostic(),
            (None, None) => Ok(Arch::native().unwrap_or_default()),
        }
    }

    /// Directory the session directory is created in.
    pub fn dump_root(&self) -> PathBuf {
        self.dump_root
            .as_ref()
            .map_or_else(std::env::temp_dir, PathBuf::from)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            arch: None,
            dump_root: None,
            log_sink: true,
            file_sink: false,
            memory_dump: false,
        }
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use itrace_recorder::engine::Arch;

    use super::SessionConfig;

    #[test]
    fn parse_from_kdl_defaults() {
        let config = knus::parse::<SessionConfig>("<content>", "")
            .map_err(miette::Report::new)
            .expect("parse kdl");

        assert_eq!(config, SessionConfig::default());
        assert_eq!(
            config.arch(None).expect("arch"),
            Arch::native().unwrap_or(Arch::Aarch64)
        );
        assert_eq!(config.dump_root(), std::env::temp_dir());
    }

    #[test]
    fn parse_from_kdl() {
        let config = knus::parse::<SessionConfig>(
            "<content>",
            indoc::indoc! {r#"
                arch "arm"
                dump-root "/data/local/tmp"
                log-sink false
                file-sink true
                memory-dump true
            "#},
        )
        .map_err(miette::Report::new)
        .expect("parse kdl");

        assert_eq!(
            config,
            SessionConfig {
                arch: Some("arm".to_owned()),
                dump_root: Some("/data/local/tmp".to_owned()),
                log_sink: false,
                file_sink: true,
                memory_dump: true,
            }
        );

        assert_eq!(config.arch(None).expect("arch"), Arch::Arm);
        assert_eq!(config.arch(Some(Arch::Aarch64)).expect("arch"), Arch::Aarch64);
        assert_eq!(config.dump_root().to_str(), Some("/data/local/tmp"));
    }

    #[test]
    fn unsupported_arch() {
        let config = SessionConfig::parse(r#"arch "x86""#).expect("parse kdl");
        assert!(config.arch(None).is_err());
    }
}

//! Configuration recognized by [`crate::get_version`].

use std::fmt;
use std::str::FromStr;

/// Which component to bump when height is applied to a release tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AutoIncrement {
    Major,
    Minor,
    #[default]
    Patch,
}

impl FromStr for AutoIncrement {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "major" => Ok(AutoIncrement::Major),
            "minor" => Ok(AutoIncrement::Minor),
            "patch" => Ok(AutoIncrement::Patch),
            other => Err(format!("invalid auto-increment component: {other}")),
        }
    }
}

impl fmt::Display for AutoIncrement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AutoIncrement::Major => "major",
            AutoIncrement::Minor => "minor",
            AutoIncrement::Patch => "patch",
        };
        write!(f, "{s}")
    }
}

/// A `(major, minor)` pair. Used both as the floor in [`Config::min_major_minor`]
/// and as the derived major/minor of a selected pre-release candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct MajorMinor {
    pub major: u64,
    pub minor: u64,
}

impl MajorMinor {
    pub fn new(major: u64, minor: u64) -> Self {
        Self { major, minor }
    }
}

impl FromStr for MajorMinor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (major, minor) = s
            .split_once('.')
            .ok_or_else(|| format!("expected 'major.minor', got: {s}"))?;

        let major = major
            .parse::<u64>()
            .map_err(|_| format!("invalid major version: {major}"))?;
        let minor = minor
            .parse::<u64>()
            .map_err(|_| format!("invalid minor version: {minor}"))?;

        Ok(MajorMinor { major, minor })
    }
}

impl fmt::Display for MajorMinor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Runtime configuration for [`crate::get_version`].
///
/// `work_dir` and the [`crate::Logger`] are passed as separate arguments to
/// `get_version` rather than stored here, since neither is a scalar setting
/// and both vary more often than the fields below do across calls that
/// otherwise share a `Config`.
///
/// # Defaults
/// - `tag_prefix`: empty (accept all tags)
/// - `min_major_minor`: `None`, equivalent to a floor of `(0, 0)`
/// - `build_metadata`: `None`
/// - `auto_increment`: [`AutoIncrement::Patch`]
/// - `default_pre_release_identifiers`: `["alpha", "0"]`
/// - `ignore_height`: `false`
#[derive(Debug, Clone)]
pub struct Config {
    pub tag_prefix: String,
    pub min_major_minor: Option<MajorMinor>,
    pub build_metadata: Option<String>,
    pub auto_increment: AutoIncrement,
    pub default_pre_release_identifiers: Vec<String>,
    pub ignore_height: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tag_prefix: String::new(),
            min_major_minor: None,
            build_metadata: None,
            auto_increment: AutoIncrement::Patch,
            default_pre_release_identifiers: vec!["alpha".into(), "0".into()],
            ignore_height: false,
        }
    }
}

impl Config {
    /// Validates the fields that can carry invalid SemVer syntax. Called once
    /// at the start of [`crate::get_version`], before any Git work happens.
    pub(crate) fn validate(&self) -> Result<(), String> {
        if let Some(meta) = &self.build_metadata {
            crate::version::validate_build_metadata(meta)
                .map_err(|_| format!("build_metadata '{meta}' is not valid SemVer build metadata"))?;
        }
        Ok(())
    }
}

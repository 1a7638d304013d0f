//! SemVer 2.0 grammar: parsing, printing, ordering, and the domain-specific
//! transformations the walker needs — satisfying a minimum `(major, minor)`,
//! applying height, and appending build metadata.
//!
//! Parsing and identifier-syntax validation are delegated to the `semver`
//! crate; the comparison and transformation rules above are specific to
//! this system and implemented directly on the identifier lists so that
//! height can be appended without re-serializing and re-parsing a string.

use std::fmt;
use std::str::FromStr;

use crate::config::{AutoIncrement, MajorMinor};

/// A single dot-separated SemVer identifier, classified per the
/// numeric/alphanumeric comparison rule in SemVer 2.0 §11.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identifier {
    Numeric(u64),
    AlphaNumeric(String),
}

impl Identifier {
    fn from_part(part: &str) -> Self {
        let is_numeric = !part.is_empty()
            && part.bytes().all(|b| b.is_ascii_digit())
            && (part == "0" || !part.starts_with('0'));

        if is_numeric {
            if let Ok(n) = part.parse::<u64>() {
                return Identifier::Numeric(n);
            }
        }
        Identifier::AlphaNumeric(part.to_string())
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Numeric(n) => write!(f, "{n}"),
            Identifier::AlphaNumeric(s) => write!(f, "{s}"),
        }
    }
}

impl PartialOrd for Identifier {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Identifier {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        use std::cmp::Ordering;
        match (self, other) {
            (Identifier::Numeric(a), Identifier::Numeric(b)) => a.cmp(b),
            (Identifier::Numeric(_), Identifier::AlphaNumeric(_)) => Ordering::Less,
            (Identifier::AlphaNumeric(_), Identifier::Numeric(_)) => Ordering::Greater,
            (Identifier::AlphaNumeric(a), Identifier::AlphaNumeric(b)) => a.as_str().cmp(b.as_str()),
        }
    }
}

fn identifiers(joined: &str) -> Vec<Identifier> {
    if joined.is_empty() {
        Vec::new()
    } else {
        joined.split('.').map(Identifier::from_part).collect()
    }
}

fn join(ids: &[Identifier]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(".")
}

/// Error returned when a string is not a valid SemVer 2.0 version or a
/// valid SemVer build-metadata string. Carries no detail beyond "invalid",
/// matching the grammar's pure, exception-free contract — callers that need
/// a reason should inspect the string themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidVersion;

impl fmt::Display for InvalidVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "not a valid SemVer 2.0 version")
    }
}

impl std::error::Error for InvalidVersion {}

/// A SemVer 2.0 version: `major.minor.patch[-pre_release][+build_metadata]`.
///
/// Ordering follows SemVer 2.0 §11 and ignores `build_metadata` entirely, per
/// [`Version::eq`] and [`Version::cmp`].
#[derive(Debug, Clone, Eq)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub pre_release: Vec<Identifier>,
    pub build_metadata: Vec<Identifier>,
}

impl Version {
    /// Builds a release version with no pre-release or build metadata.
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            pre_release: Vec::new(),
            build_metadata: Vec::new(),
        }
    }

    /// The synthetic `0.0.0-<default pre-release>` version used when no tag
    /// is reachable.
    pub fn synthetic_root(default_pre_release_identifiers: &[String]) -> Self {
        Self {
            major: 0,
            minor: 0,
            patch: 0,
            pre_release: default_pre_release_identifiers
                .iter()
                .map(|s| Identifier::from_part(s))
                .collect(),
            build_metadata: Vec::new(),
        }
    }

    /// Parses `text` as `tag_prefix` followed by a strict SemVer 2.0 string.
    /// Returns `None` for any of the failure modes in the grammar: wrong
    /// prefix, malformed numerics, empty identifiers, illegal characters, or
    /// trailing garbage.
    pub fn parse(text: &str, tag_prefix: &str) -> Option<Version> {
        let rest = text.strip_prefix(tag_prefix)?;
        let parsed = semver::Version::parse(rest).ok()?;
        Some(Version::from_semver(&parsed))
    }

    fn from_semver(v: &semver::Version) -> Version {
        Version {
            major: v.major,
            minor: v.minor,
            patch: v.patch,
            pre_release: identifiers(v.pre.as_str()),
            build_metadata: identifiers(v.build.as_str()),
        }
    }

    /// `true` if `pre_release` is non-empty.
    pub fn is_prerelease(&self) -> bool {
        !self.pre_release.is_empty()
    }

    /// Returns a version whose `(major, minor) >= min`, per §4.1 `Satisfying`.
    pub fn satisfying(&self, min: &MajorMinor, default_pre_release_identifiers: &[String]) -> Version {
        if (self.major, self.minor) >= (min.major, min.minor) {
            self.clone()
        } else {
            Version {
                major: min.major,
                minor: min.minor,
                patch: 0,
                pre_release: default_pre_release_identifiers
                    .iter()
                    .map(|s| Identifier::from_part(s))
                    .collect(),
                build_metadata: Vec::new(),
            }
        }
    }

    /// Applies height per §4.1 `WithHeight`. A no-op when `height == 0`.
    pub fn with_height(
        &self,
        height: u64,
        auto_increment: AutoIncrement,
        default_pre_release_identifiers: &[String],
    ) -> Version {
        if height == 0 {
            return self.clone();
        }

        if self.is_prerelease() {
            let mut pre_release = self.pre_release.clone();
            pre_release.push(Identifier::Numeric(height));
            Version {
                major: self.major,
                minor: self.minor,
                patch: self.patch,
                pre_release,
                build_metadata: Vec::new(),
            }
        } else {
            let (major, minor, patch) = match auto_increment {
                AutoIncrement::Major => (self.major + 1, 0, 0),
                AutoIncrement::Minor => (self.major, self.minor + 1, 0),
                AutoIncrement::Patch => (self.major, self.minor, self.patch + 1),
            };
            let mut pre_release: Vec<Identifier> = default_pre_release_identifiers
                .iter()
                .map(|s| Identifier::from_part(s))
                .collect();
            pre_release.push(Identifier::Numeric(height));
            Version {
                major,
                minor,
                patch,
                pre_release,
                build_metadata: Vec::new(),
            }
        }
    }

    /// Replaces `build_metadata` with the identifiers parsed from `meta`.
    /// An empty `meta` is the identity. Fails only if `meta` is not valid
    /// SemVer build metadata — callers on the `get_version` path validate
    /// this once at configuration intake via [`validate_build_metadata`], so
    /// this should never fail there.
    pub fn add_build_metadata(&self, meta: &str) -> Result<Version, InvalidVersion> {
        if meta.is_empty() {
            return Ok(self.clone());
        }
        validate_build_metadata(meta)?;
        Ok(Version {
            build_metadata: identifiers(meta),
            ..self.clone()
        })
    }
}

/// Validates that `meta` is syntactically valid SemVer build metadata
/// (dot-separated, non-empty `[0-9A-Za-z-]+` identifiers), without building
/// a [`Version`]. Used at configuration intake so a bad `build_metadata`
/// surfaces as `InvalidConfiguration` before any Git work happens.
pub fn validate_build_metadata(meta: &str) -> Result<(), InvalidVersion> {
    semver::BuildMetadata::new(meta)
        .map(|_| ())
        .map_err(|_| InvalidVersion)
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.pre_release.is_empty() {
            write!(f, "-{}", join(&self.pre_release))?;
        }
        if !self.build_metadata.is_empty() {
            write!(f, "+{}", join(&self.build_metadata))?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = InvalidVersion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s, "").ok_or(InvalidVersion)
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.major == other.major
            && self.minor == other.minor
            && self.patch == other.patch
            && self.pre_release == other.pre_release
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        use std::cmp::Ordering;

        self.major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then(self.patch.cmp(&other.patch))
            .then_with(|| match (self.pre_release.is_empty(), other.pre_release.is_empty()) {
                (true, true) => Ordering::Equal,
                (true, false) => Ordering::Greater,
                (false, true) => Ordering::Less,
                // `Vec<Identifier>::cmp` is exactly the left-to-right,
                // shorter-prefix-is-lower comparison SemVer 2.0 §11 asks for.
                (false, false) => self.pre_release.cmp(&other.pre_release),
            })
    }
}

//! Java runtime version value
//!
//! Versions follow the `huge.major.minor[_patch][-identifier]` scheme used by
//! Java runtimes before JEP 223:
//! - `1.8` -> 1.8.0
//! - `1.8.0_25` -> 1.8.0_25
//! - `1.7.0-ea` -> early access build of 1.7.0
//!
//! See <http://www.oracle.com/technetwork/java/javase/versioning-naming-139433.html>

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::version::error::VersionError;

/// Matches a whole version string: `huge.major[.minor[_patch]][-identifier]`
static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]+)\.([0-9]+)(?:\.([0-9]+)(?:_([0-9]+))?)?(?:-(.+))?$").unwrap()
});

const HUGE_GROUP: usize = 1;
const MAJOR_GROUP: usize = 2;
const MINOR_GROUP: usize = 3;
const PATCH_GROUP: usize = 4;
const IDENTIFIER_GROUP: usize = 5;

/// An immutable Java version.
///
/// Fields are private; a value is either built through [`JavaVersion::new`]
/// or parsed, and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JavaVersion {
    huge: u32,
    major: u32,
    minor: u32,
    patch: u32,
    /// Pre-release or build qualifier such as `ea` or `rc1`. `None` is a GA release.
    identifier: Option<String>,
}

impl JavaVersion {
    /// Smallest possible version, `0.0.0`.
    pub const MIN_VALUE: JavaVersion = JavaVersion {
        huge: 0,
        major: 0,
        minor: 0,
        patch: 0,
        identifier: None,
    };

    /// Create a version from its components.
    ///
    /// Fails with [`VersionError::InvalidArgument`] if any number is negative
    /// or the identifier is present but empty.
    pub fn new(
        huge: i32,
        major: i32,
        minor: i32,
        patch: i32,
        identifier: Option<&str>,
    ) -> Result<Self, VersionError> {
        let huge = non_negative("huge", huge)?;
        let major = non_negative("major", major)?;
        let minor = non_negative("minor", minor)?;
        let patch = non_negative("patch", patch)?;

        if identifier.is_some_and(str::is_empty) {
            return Err(VersionError::InvalidArgument(
                "identifier must not be empty string".to_string(),
            ));
        }

        Ok(Self {
            huge,
            major,
            minor,
            patch,
            identifier: identifier.map(str::to_string),
        })
    }

    /// Create a GA release version (no identifier).
    pub fn release(huge: i32, major: i32, minor: i32, patch: i32) -> Result<Self, VersionError> {
        Self::new(huge, major, minor, patch, None)
    }

    /// Parse a version string.
    ///
    /// The whole string must match; minor and patch default to 0 when omitted.
    /// Components that do not fit in an `i32` are rejected as malformed.
    pub fn parse(version_string: &str) -> Result<Self, VersionError> {
        let malformed = || VersionError::Malformed(version_string.to_string());

        let captures = VERSION_RE
            .captures(version_string)
            .ok_or_else(malformed)?;

        let component = |index: usize| -> Result<i32, VersionError> {
            captures
                .get(index)
                .map_or(Ok(0), |m| m.as_str().parse::<i32>().map_err(|_| malformed()))
        };

        Self::new(
            component(HUGE_GROUP)?,
            component(MAJOR_GROUP)?,
            component(MINOR_GROUP)?,
            component(PATCH_GROUP)?,
            captures.get(IDENTIFIER_GROUP).map(|m| m.as_str()),
        )
    }

    pub fn huge(&self) -> u32 {
        self.huge
    }

    pub fn major(&self) -> u32 {
        self.major
    }

    pub fn minor(&self) -> u32 {
        self.minor
    }

    pub fn patch(&self) -> u32 {
        self.patch
    }

    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }

    /// Returns true for GA releases, i.e. versions without an identifier.
    pub fn is_release(&self) -> bool {
        self.identifier.is_none()
    }

    /// Returns true if this version is the same as or newer than `minimum`.
    pub fn is_at_least(&self, minimum: &JavaVersion) -> bool {
        self >= minimum
    }

    /// Canonical rendering, e.g. `1.8.0_05-ea`.
    ///
    /// A zero patch is omitted entirely, so `1.8.0_00` renders as `1.8.0`.
    pub fn to_version_string(&self) -> String {
        self.to_string()
    }
}

fn non_negative(field: &str, value: i32) -> Result<u32, VersionError> {
    u32::try_from(value)
        .map_err(|_| VersionError::InvalidArgument(format!("{field} must not be negative")))
}

/// Parse an optional version string.
///
/// `None` fails with [`VersionError::MissingInput`], anything else is
/// handed to [`JavaVersion::parse`].
pub fn parse_version(version_string: Option<&str>) -> Result<JavaVersion, VersionError> {
    let version_string = version_string.ok_or(VersionError::MissingInput)?;
    JavaVersion::parse(version_string)
}

/// Compare two optional versions.
///
/// A missing version on either side fails with [`VersionError::NullComparison`].
pub fn compare_versions(
    version: Option<&JavaVersion>,
    other: Option<&JavaVersion>,
) -> Result<Ordering, VersionError> {
    match (version, other) {
        (Some(version), Some(other)) => Ok(version.cmp(other)),
        _ => Err(VersionError::NullComparison),
    }
}

impl fmt::Display for JavaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.huge, self.major, self.minor)?;
        if self.patch != 0 {
            write!(f, "_{:02}", self.patch)?;
        }
        if let Some(identifier) = &self.identifier {
            write!(f, "-{identifier}")?;
        }
        Ok(())
    }
}

impl FromStr for JavaVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Ord for JavaVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.huge, self.major, self.minor, self.patch)
            .cmp(&(other.huge, other.major, other.minor, other.patch))
            .then_with(|| compare_identifiers(self.identifier(), other.identifier()))
    }
}

impl PartialOrd for JavaVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Tie-break for versions with identical numbers.
fn compare_identifiers(identifier: Option<&str>, other: Option<&str>) -> Ordering {
    match (identifier, other) {
        (None, None) => Ordering::Equal,
        // GA release outranks any ea/rc build of the same numbers
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        // Only an approximation: "rc10" sorts before "rc2"
        (Some(identifier), Some(other)) => identifier.cmp(other),
    }
}

impl Serialize for JavaVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for JavaVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        JavaVersion::parse(&s).map_err(de::Error::custom)
    }
}

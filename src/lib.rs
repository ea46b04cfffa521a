//! Parse, render and compare Java runtime versions of the form
//! `huge.major.minor[_patch][-identifier]`.
//!
//! ```
//! use java_version::JavaVersion;
//!
//! let runtime = JavaVersion::parse("1.8.0_5").unwrap();
//! assert_eq!(runtime.to_version_string(), "1.8.0_05");
//! assert!(runtime.is_at_least(&JavaVersion::parse("1.8").unwrap()));
//! ```

pub mod config;
pub mod version;

pub use version::{
    JavaVersion, RUNTIME_VERSION, VersionError, compare_versions, parse_version, runtime_version,
};

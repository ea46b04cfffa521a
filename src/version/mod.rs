//! Java version layer
//!
//! # Modules
//!
//! - [`java`]: The `JavaVersion` value type: parsing, rendering and ordering
//! - [`runtime`]: One-time resolution of the current runtime version
//! - [`source`]: Property sources the runtime version is read from
//! - [`error`]: Error types for parsing, construction and property lookup

pub mod error;
pub mod java;
pub mod runtime;
pub mod source;

pub use error::{PropertyError, VersionError};
pub use java::{JavaVersion, compare_versions, parse_version};
pub use runtime::{RUNTIME_VERSION, resolve_runtime_version, runtime_version};
pub use source::{EnvPropertySource, PropertySource};

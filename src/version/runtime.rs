//! Runtime version detection
//!
//! The runtime version is read from the full version property first
//! (e.g. `1.8.0_25`), then from the coarser specification version property
//! (e.g. `1.8`). Sources that are missing, unreadable or malformed are
//! skipped. When nothing resolves the result is [`JavaVersion::MIN_VALUE`].

use std::sync::LazyLock;

use tracing::{debug, warn};

use crate::config::ResolverConfig;
use crate::version::java::JavaVersion;
use crate::version::source::{EnvPropertySource, PropertySource};

/// Best available approximation of the runtime version, resolved once from
/// the process environment.
pub static RUNTIME_VERSION: LazyLock<JavaVersion> = LazyLock::new(|| {
    resolve_runtime_version(&EnvPropertySource, &ResolverConfig::default())
        .unwrap_or(JavaVersion::MIN_VALUE)
});

/// Returns the process-wide runtime version.
pub fn runtime_version() -> &'static JavaVersion {
    &RUNTIME_VERSION
}

/// Resolve the runtime version from `source`, falling back from the version
/// property to the specification version property.
pub fn resolve_runtime_version<S: PropertySource + ?Sized>(
    source: &S,
    config: &ResolverConfig,
) -> Option<JavaVersion> {
    read_version(source, &config.version_property)
        .or_else(|| read_version(source, &config.specification_version_property))
}

fn read_version<S: PropertySource + ?Sized>(source: &S, name: &str) -> Option<JavaVersion> {
    let raw = match source.property(name) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!("Property '{}' is not set", name);
            return None;
        }
        Err(e) => {
            warn!("Failed to read property '{}': {}", name, e);
            return None;
        }
    };

    // e.g. 1.8.0_25.1 does not fit the scheme
    let Ok(version) = JavaVersion::parse(&raw).inspect_err(|e| {
        warn!("Ignoring property '{}': {}", name, e);
    }) else {
        return None;
    };

    debug!("Resolved runtime version {} from '{}'", version, name);
    Some(version)
}

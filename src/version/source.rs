//! Sources of raw runtime version strings

#[cfg(test)]
use mockall::automock;

use crate::version::error::PropertyError;

/// Trait for looking up named properties such as the runtime version
#[cfg_attr(test, automock)]
pub trait PropertySource: Send + Sync {
    /// Returns `Ok(None)` when the property is not set
    fn property(&self, name: &str) -> Result<Option<String>, PropertyError>;
}

/// Reads properties from the process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvPropertySource;

impl PropertySource for EnvPropertySource {
    fn property(&self, name: &str) -> Result<Option<String>, PropertyError> {
        match std::env::var(name) {
            Ok(value) => Ok(Some(value)),
            Err(std::env::VarError::NotPresent) => Ok(None),
            Err(std::env::VarError::NotUnicode(_)) => {
                Err(PropertyError::NotUnicode(name.to_string()))
            }
        }
    }
}

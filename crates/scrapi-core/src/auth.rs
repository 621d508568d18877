//! API credential for the ScraperAPI service
//!
//! The key is resolved once, at construction time, with priority:
//! 1. An explicit value passed by the caller
//! 2. A lookup of `SCRAPERAPI_API_KEY` (the process environment by default,
//!    or any resolver the caller injects)
//!
//! Neither source yielding a non-empty value is a hard configuration error.

use crate::{Error, Result};
use std::fmt;

/// Name of the credential when passed explicitly
pub const API_KEY_FIELD: &str = "scraperapi_api_key";

/// Environment variable consulted when no explicit key is given
pub const API_KEY_ENV_VAR: &str = "SCRAPERAPI_API_KEY";

/// A non-empty ScraperAPI key.
///
/// The value is only reachable through [`ApiKey::expose`]; `Debug` output is
/// redacted so keys never end up in logs.
///
/// # Examples
///
/// ```
/// use scrapi_core::ApiKey;
///
/// let key = ApiKey::resolve_with(Some("direct_key".to_string()), |_| None).unwrap();
/// assert_eq!(key.expose(), "direct_key");
/// assert_eq!(format!("{:?}", key), "ApiKey(\"****\")");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a key, rejecting empty values
    pub fn new(key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        if key.is_empty() {
            return Err(missing_credential());
        }
        Ok(Self(key))
    }

    /// Resolve from an explicit value, falling back to the process environment
    pub fn resolve(explicit: Option<String>) -> Result<Self> {
        Self::resolve_with(explicit, |name| std::env::var(name).ok())
    }

    /// Resolve from an explicit value, falling back to `lookup(SCRAPERAPI_API_KEY)`.
    ///
    /// Empty strings from either source count as absent.
    pub fn resolve_with<F>(explicit: Option<String>, lookup: F) -> Result<Self>
    where
        F: FnOnce(&str) -> Option<String>,
    {
        if let Some(key) = explicit.filter(|k| !k.is_empty()) {
            return Ok(Self(key));
        }

        match lookup(API_KEY_ENV_VAR).filter(|k| !k.is_empty()) {
            Some(key) => {
                tracing::debug!("Using ScraperAPI key from {}", API_KEY_ENV_VAR);
                Ok(Self(key))
            }
            None => Err(missing_credential()),
        }
    }

    /// The raw key, for building outbound requests only
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ApiKey").field(&"****").finish()
    }
}

fn missing_credential() -> Error {
    Error::MissingCredential {
        field: API_KEY_FIELD,
        env_var: API_KEY_ENV_VAR,
    }
}

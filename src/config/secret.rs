//! Secure credential handling using the secrecy crate
//!
//! The external provider API key is held as a `Secret` so it is zeroed on
//! drop and redacted from Debug output; `expose_secret()` is the only way
//! to read it.

use secrecy::{CloneableSecret, DebugSecret, Secret, SerializableSecret};
use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

/// Newtype wrapper for String that implements the traits `Secret` requires
#[derive(Clone, Debug, Serialize, Deserialize, Zeroize)]
#[zeroize(drop)]
#[serde(transparent)]
pub struct ApiKeyValue(String);

impl CloneableSecret for ApiKeyValue {}
impl DebugSecret for ApiKeyValue {}
impl SerializableSecret for ApiKeyValue {}

impl From<String> for ApiKeyValue {
    fn from(s: String) -> Self {
        ApiKeyValue(s)
    }
}

impl From<&str> for ApiKeyValue {
    fn from(s: &str) -> Self {
        ApiKeyValue(s.to_string())
    }
}

impl AsRef<str> for ApiKeyValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Secret-typed external provider API key
pub type ApiKey = Secret<ApiKeyValue>;

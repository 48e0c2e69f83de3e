//! Bearer credential for pushes and REST calls.

use super::ConfigError;
use secrecy::{ExposeSecret, SecretString};

/// Token authorizing both the branch push and the pull request call.
///
/// The value is only reachable through [`Credential::expose`]; `Debug`
/// output is redacted.
#[derive(Clone)]
pub struct Credential(SecretString);

impl Credential {
    /// Validates a raw token, rejecting missing or blank values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingCredential`] when the token is absent
    /// or contains only whitespace.
    pub fn new(token: Option<String>) -> Result<Self, ConfigError> {
        match token {
            Some(token) if !token.trim().is_empty() => {
                Ok(Self(SecretString::new(token.trim().into())))
            }
            _ => Err(ConfigError::MissingCredential),
        }
    }

    /// Returns the raw token.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Credential").field(&"[REDACTED]").finish()
    }
}

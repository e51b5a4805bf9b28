//! API credential management.

use secrecy::{ExposeSecret, SecretString};

use crate::error::P2pb2bError;

/// Default environment variable holding the API key.
pub const ENV_API_KEY: &str = "P2PB2B_API_KEY";
/// Default environment variable holding the API secret.
pub const ENV_API_SECRET: &str = "P2PB2B_API_SECRET";

/// An API key and secret pair for the p2pb2b exchange.
///
/// The secret is held in [`SecretString`] so it is zeroed on drop and
/// redacted from `Debug` output. p2pb2b secrets are plain strings and are
/// used as HMAC key material byte for byte.
#[derive(Clone)]
pub struct Credentials {
    /// The public API key, sent in the `X-TXC-APIKEY` header.
    pub api_key: String,
    api_secret: SecretString,
}

impl Credentials {
    /// Create credentials from an API key and secret.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: SecretString::from(api_secret.into()),
        }
    }

    /// Expose the secret for signing.
    pub fn expose_secret(&self) -> &str {
        self.api_secret.expose_secret()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}

/// Source of credentials for the client.
///
/// The client asks its provider for credentials on every signed request, so
/// a provider may rotate keys behind this trait.
pub trait CredentialsProvider: Send + Sync {
    /// Get the current credentials.
    fn get_credentials(&self) -> &Credentials;
}

/// A provider holding one fixed credential pair.
#[derive(Debug, Clone)]
pub struct StaticCredentials {
    credentials: Credentials,
}

impl StaticCredentials {
    /// Create a provider from an API key and secret.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            credentials: Credentials::new(api_key, api_secret),
        }
    }
}

impl CredentialsProvider for StaticCredentials {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}

/// A provider reading credentials from the environment once at construction.
#[derive(Debug)]
pub struct EnvCredentials {
    credentials: Credentials,
}

impl EnvCredentials {
    /// Read credentials from `P2PB2B_API_KEY` and `P2PB2B_API_SECRET`.
    pub fn from_env() -> Result<Self, P2pb2bError> {
        Self::from_env_vars(ENV_API_KEY, ENV_API_SECRET)
    }

    /// Read credentials from custom environment variable names.
    pub fn from_env_vars(key_var: &str, secret_var: &str) -> Result<Self, P2pb2bError> {
        let api_key = std::env::var(key_var)
            .map_err(|_| P2pb2bError::Auth(format!("environment variable {key_var} is not set")))?;
        let api_secret = std::env::var(secret_var).map_err(|_| {
            P2pb2bError::Auth(format!("environment variable {secret_var} is not set"))
        })?;
        Ok(Self {
            credentials: Credentials::new(api_key, api_secret),
        })
    }

    /// Read credentials from the default variables, or `None` if either is
    /// unset. Convenient for tests that skip when no keys are configured.
    pub fn try_from_env() -> Option<Self> {
        Self::from_env().ok()
    }
}

impl CredentialsProvider for EnvCredentials {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}

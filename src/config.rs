//! Credential loading (secrets file > environment).

use std::fmt;
use std::path::Path;

use serde::Deserialize;

use crate::error::GatewayError;

/// Environment variable holding the backend API key.
pub const CREDENTIAL_VAR: &str = "GEMINI_API_KEY";

/// Default secrets file checked before the environment.
pub const SECRETS_FILE: &str = "secrets.toml";

/// API credential for the generation backend.
///
/// Lives for the process lifetime. `Debug` output is redacted so the secret
/// cannot leak into logs.
#[derive(Clone)]
pub struct Credential(String);

impl Credential {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// The raw secret, for building authenticated requests.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Resolve the credential: secrets file in the working directory first,
    /// then the environment. Absence is a fatal startup condition.
    pub fn resolve() -> Result<Self, GatewayError> {
        Self::resolve_from(Path::new(SECRETS_FILE), Self::from_env())
    }

    /// Resolution order: the secrets file wins over whatever the environment
    /// supplied; with neither configured, startup fails.
    fn resolve_from(
        secrets_path: &Path,
        env_credential: Option<Self>,
    ) -> Result<Self, GatewayError> {
        if let Some(credential) = Self::from_secrets_file(secrets_path) {
            return Ok(credential);
        }
        env_credential.ok_or_else(|| {
            GatewayError::Configuration(format!(
                "API key missing. Configure {CREDENTIAL_VAR} in {SECRETS_FILE} or the environment"
            ))
        })
    }

    /// Read the credential from a TOML secrets file.
    ///
    /// An unreadable file or a file without the key both read as "not
    /// configured here" and fall through to the environment.
    pub fn from_secrets_file(path: &Path) -> Option<Self> {
        let raw = std::fs::read_to_string(path).ok()?;
        let secrets: Secrets = toml::from_str(&raw).ok()?;
        secrets
            .gemini_api_key
            .filter(|key| !key.is_empty())
            .map(Self)
    }

    /// Read the credential from the environment (after loading `.env`).
    pub fn from_env() -> Option<Self> {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error
        std::env::var(CREDENTIAL_VAR)
            .ok()
            .filter(|key| !key.is_empty())
            .map(Self)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(..)")
    }
}

#[derive(Deserialize)]
struct Secrets {
    #[serde(rename = "GEMINI_API_KEY")]
    gemini_api_key: Option<String>,
}

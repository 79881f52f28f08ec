//! Store connection settings, read from the environment.

use asistencia_core::{Error, Result};

const URL_VAR: &str = "SUPABASE_URL";
const KEY_VAR: &str = "SUPABASE_KEY";

/// Connection settings for the hosted store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Base URL of the hosted store; the REST segment is appended by the client.
    pub url: String,
    /// Service credential, sent as both apikey and bearer token.
    pub key: String,
}

impl StoreConfig {
    /// Read `SUPABASE_URL` and `SUPABASE_KEY` from the environment.
    ///
    /// A missing or empty value fails with a diagnostic naming the
    /// variable, never echoing a credential.
    pub fn from_env() -> Result<Self> {
        Ok(StoreConfig {
            url: require(URL_VAR)?,
            key: require(KEY_VAR)?,
        })
    }
}

fn require(var: &str) -> Result<String> {
    match std::env::var(var) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(Error::Config(format!("missing {var}"))),
    }
}

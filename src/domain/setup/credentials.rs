//! Partner configuration handed over by the mediation host at setup.

use secrecy::SecretString;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// Credentials key under which the host provides the Tapjoy SDK key.
pub const SDK_KEY: &str = "sdk_key";

/// Setup data for the adapter, as received from the mediation host.
///
/// Credentials arrive as an untyped JSON map; only string values are used.
/// `Debug` lists credential names only, never their values.
#[derive(Clone, Default, PartialEq, Deserialize)]
pub struct PartnerConfiguration {
    #[serde(default)]
    credentials: HashMap<String, Value>,
}

impl PartnerConfiguration {
    pub fn new(credentials: HashMap<String, Value>) -> Self {
        Self { credentials }
    }

    pub fn with_credential(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.credentials.insert(key.into(), value.into());
        self
    }

    pub fn credentials(&self) -> &HashMap<String, Value> {
        &self.credentials
    }

    /// Returns the SDK key, if present as a non-empty string.
    pub fn sdk_key(&self) -> Option<SecretString> {
        self.credentials
            .get(SDK_KEY)
            .and_then(Value::as_str)
            .filter(|key| !key.trim().is_empty())
            .map(|key| SecretString::new(key.to_string()))
    }
}

impl fmt::Debug for PartnerConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&str> = self.credentials.keys().map(String::as_str).collect();
        keys.sort_unstable();
        f.debug_struct("PartnerConfiguration")
            .field("credential_keys", &keys)
            .finish_non_exhaustive()
    }
}

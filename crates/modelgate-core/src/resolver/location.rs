//! Credential location descriptors

use std::env;

use crate::secrets::{CredentialStore, SecretValue, StoreKey};

use super::errors::{ResolveError, ResolveResult};

/// Where a provider's real API key originates
///
/// This is the only trace of credential sourcing left in the visible
/// model configuration once the ingestion filter has run. The wire
/// syntax is:
///
/// - `dynamic::store_{model_id}` — resolved from the credential store
/// - `env::VAR_NAME` — read from the process environment
/// - anything else — taken as a static literal key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialLocation {
    /// Literal key embedded in the provider config
    Static(SecretValue),
    /// Key read from an environment variable at call time
    EnvVar(String),
    /// Key held in the credential store under a `store_` key
    Dynamic(StoreKey),
}

impl CredentialLocation {
    /// Parse a descriptor string from provider config
    pub fn parse(descriptor: &str) -> ResolveResult<Self> {
        if let Some(raw_key) = descriptor.strip_prefix("dynamic::") {
            let key = StoreKey::parse(raw_key).ok_or_else(|| {
                ResolveError::MalformedLocation(format!(
                    "dynamic reference '{}' is not a store key",
                    raw_key
                ))
            })?;
            return Ok(Self::Dynamic(key));
        }

        if let Some(var_name) = descriptor.strip_prefix("env::") {
            if var_name.is_empty() {
                return Err(ResolveError::MalformedLocation(
                    "env reference names no variable".to_string(),
                ));
            }
            return Ok(Self::EnvVar(var_name.to_string()));
        }

        if descriptor.is_empty() {
            return Err(ResolveError::MalformedLocation(
                "empty descriptor".to_string(),
            ));
        }

        Ok(Self::Static(SecretValue::new(descriptor)))
    }

    /// Resolve this location to a secret value
    ///
    /// `Dynamic` consults the store snapshot at call time; nothing is
    /// cached, so a rotation is visible to the very next resolution.
    /// `Static` and `EnvVar` never touch the store. Absence is a hard
    /// failure for the affected provider.
    pub fn resolve(&self, store: &CredentialStore) -> ResolveResult<SecretValue> {
        match self {
            Self::Static(value) => {
                if value.is_empty() {
                    Err(ResolveError::CredentialNotFound(
                        "static credential is empty".to_string(),
                    ))
                } else {
                    Ok(value.clone())
                }
            }
            Self::EnvVar(name) => match env::var(name) {
                Ok(value) if !value.is_empty() => Ok(SecretValue::new(value)),
                _ => Err(ResolveError::CredentialNotFound(format!(
                    "environment variable {} is not set",
                    name
                ))),
            },
            Self::Dynamic(key) => store
                .get(key)
                .ok_or_else(|| ResolveError::CredentialNotFound(key.to_string())),
        }
    }
}

impl std::fmt::Display for CredentialLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // Static never renders its value
            Self::Static(_) => write!(f, "static::<redacted>"),
            Self::EnvVar(name) => write!(f, "env::{}", name),
            Self::Dynamic(key) => write!(f, "dynamic::{}", key),
        }
    }
}

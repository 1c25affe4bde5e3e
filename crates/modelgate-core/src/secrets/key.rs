//! Store key derivation

/// Index into the [`CredentialStore`](super::CredentialStore), derived
/// from a model identifier.
///
/// The format is `store_{model_id}`. Keys are deterministic: the same
/// model always maps to the same key, and uniqueness is inherited from
/// the model identifiers owned by the upstream catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StoreKey(String);

/// Prefix shared by every store key
pub const STORE_KEY_PREFIX: &str = "store_";

impl StoreKey {
    /// Derive the key for a model identifier
    pub fn for_model(model_id: &str) -> Self {
        Self(format!("{}{}", STORE_KEY_PREFIX, model_id))
    }

    /// Parse an already-derived key, e.g. from a `dynamic::` descriptor
    ///
    /// Returns `None` if the string does not carry the `store_` prefix.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.len() > STORE_KEY_PREFIX.len() && raw.starts_with(STORE_KEY_PREFIX) {
            Some(Self(raw.to_string()))
        } else {
            None
        }
    }

    /// The full key string, prefix included
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The model identifier this key was derived from
    pub fn model_id(&self) -> &str {
        &self.0[STORE_KEY_PREFIX.len()..]
    }
}

impl std::fmt::Display for StoreKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

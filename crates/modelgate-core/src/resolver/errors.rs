//! Errors that can occur during credential resolution and merging

use thiserror::Error;

/// Errors surfaced on the inference call path
///
/// All variants are scoped to a single provider's resolution; none is
/// process-fatal and none is retried (re-reading the store would only
/// reproduce the same absence until the next feed event).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// A `dynamic::` descriptor referenced a store key with no entry,
    /// or an `env::` variable was unset. No silent fallback.
    #[error("Credential not found: {0}")]
    CredentialNotFound(String),

    /// Neither a caller-supplied credential nor a configured location
    /// was available for the provider.
    #[error("No credential available for provider: {0}")]
    MissingCredential(String),

    /// The location descriptor string could not be parsed.
    #[error("Malformed credential location: {0}")]
    MalformedLocation(String),
}

pub type ResolveResult<T> = Result<T, ResolveError>;

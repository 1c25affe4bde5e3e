//! Request-time credential merging
//!
//! Combines caller-supplied credentials with store-resolved ones.
//! Precedence is fixed: a present, non-empty caller credential always
//! wins, so a customer can bring their own key per request without
//! mutating the shared store.

use std::collections::HashMap;
use std::sync::Arc;

use crate::log_debug;
use crate::logging::SharedLogger;
use crate::secrets::{CredentialStore, SecretValue};
use crate::types::ProviderRoute;

use super::errors::{ResolveError, ResolveResult};
use super::location::CredentialLocation;

/// Merges caller-supplied and store-resolved credentials per provider
pub struct CredentialMerger {
    store: Arc<CredentialStore>,
    logger: SharedLogger,
}

impl CredentialMerger {
    /// Create a merger over an injected store
    pub fn new(store: Arc<CredentialStore>, logger: SharedLogger) -> Self {
        Self { store, logger }
    }

    /// Produce the final credential for one provider
    ///
    /// A non-empty caller credential short-circuits resolution
    /// entirely. Otherwise the configured location is resolved against
    /// the live store; a failing `dynamic::`/`env::` resolution
    /// propagates as [`ResolveError::CredentialNotFound`]. With no
    /// caller credential and no configured location the provider has
    /// nothing to use and the call fails with
    /// [`ResolveError::MissingCredential`].
    pub fn merge(
        &self,
        provider: &str,
        location: Option<&CredentialLocation>,
        caller_supplied: Option<&str>,
    ) -> ResolveResult<SecretValue> {
        if let Some(caller) = caller_supplied {
            if !caller.is_empty() {
                log_debug!(
                    self.logger,
                    "provider '{}': using caller-supplied credential",
                    provider
                );
                return Ok(SecretValue::new(caller));
            }
        }

        match location {
            Some(location) => location.resolve(&self.store),
            None => Err(ResolveError::MissingCredential(provider.to_string())),
        }
    }

    /// Merge credentials for every provider route of a model
    ///
    /// Failures are collected per provider instead of aborting the
    /// whole set; the caller decides whether a partial result is
    /// usable for the request.
    pub fn merge_all(
        &self,
        routes: &HashMap<String, ProviderRoute>,
        caller_supplied: &HashMap<String, String>,
    ) -> MergedCredentials {
        let mut merged = MergedCredentials::new();

        for (provider, route) in routes {
            let location = match route.api_key_location.as_deref() {
                Some(descriptor) => match CredentialLocation::parse(descriptor) {
                    Ok(location) => Some(location),
                    Err(err) => {
                        merged.record_failure(provider.clone(), err);
                        continue;
                    }
                },
                None => None,
            };

            let caller = caller_supplied.get(provider).map(String::as_str);
            match self.merge(provider, location.as_ref(), caller) {
                Ok(value) => merged.insert(provider.clone(), value),
                Err(err) => merged.record_failure(provider.clone(), err),
            }
        }

        merged
    }
}

/// Request-scoped credential set, one entry per provider
///
/// Owned exclusively by the handling call and never persisted beyond
/// it; every `SecretValue` inside scrubs itself when the set drops.
#[derive(Debug, Default)]
pub struct MergedCredentials {
    resolved: HashMap<String, SecretValue>,
    failures: Vec<(String, ResolveError)>,
}

impl MergedCredentials {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successfully merged credential
    pub fn insert(&mut self, provider: String, value: SecretValue) {
        self.resolved.insert(provider, value);
    }

    /// Record a per-provider failure
    pub fn record_failure(&mut self, provider: String, error: ResolveError) {
        self.failures.push((provider, error));
    }

    /// The credential merged for a provider, if any
    pub fn get(&self, provider: &str) -> Option<&SecretValue> {
        self.resolved.get(provider)
    }

    /// Providers that failed to merge, with their errors
    pub fn failures(&self) -> &[(String, ResolveError)] {
        &self.failures
    }

    /// Whether every provider merged successfully
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Number of successfully merged credentials
    pub fn len(&self) -> usize {
        self.resolved.len()
    }

    /// Whether no credential merged
    pub fn is_empty(&self) -> bool {
        self.resolved.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::NoOpLogger;
    use crate::secrets::StoreKey;

    fn merger(store: &Arc<CredentialStore>) -> CredentialMerger {
        CredentialMerger::new(Arc::clone(store), Arc::new(NoOpLogger::new()))
    }

    #[test]
    fn test_caller_credential_wins() {
        let store = Arc::new(CredentialStore::new());
        store.upsert(StoreKey::for_model("m"), SecretValue::new("sk-store"));

        let location = CredentialLocation::Dynamic(StoreKey::for_model("m"));
        let value = merger(&store)
            .merge("openai", Some(&location), Some("sk-caller"))
            .unwrap();

        assert_eq!(value.expose(), "sk-caller");
    }

    #[test]
    fn test_empty_caller_credential_is_absent() {
        let store = Arc::new(CredentialStore::new());
        store.upsert(StoreKey::for_model("m"), SecretValue::new("sk-store"));

        let location = CredentialLocation::Dynamic(StoreKey::for_model("m"));
        let value = merger(&store)
            .merge("openai", Some(&location), Some(""))
            .unwrap();

        assert_eq!(value.expose(), "sk-store");
    }

    #[test]
    fn test_store_value_used_without_caller() {
        let store = Arc::new(CredentialStore::new());
        store.upsert(StoreKey::for_model("m"), SecretValue::new("sk-store"));

        let location = CredentialLocation::Dynamic(StoreKey::for_model("m"));
        let value = merger(&store).merge("openai", Some(&location), None).unwrap();

        assert_eq!(value.expose(), "sk-store");
    }

    #[test]
    fn test_neither_available_is_missing_credential() {
        let store = Arc::new(CredentialStore::new());

        let err = merger(&store).merge("openai", None, None).unwrap_err();
        assert_eq!(err, ResolveError::MissingCredential("openai".to_string()));
    }

    #[test]
    fn test_dynamic_absence_propagates_not_found() {
        let store = Arc::new(CredentialStore::new());

        let location = CredentialLocation::Dynamic(StoreKey::for_model("gone"));
        let err = merger(&store)
            .merge("openai", Some(&location), None)
            .unwrap_err();

        assert!(matches!(err, ResolveError::CredentialNotFound(_)));
    }

    #[test]
    fn test_merge_all_collects_failures() {
        let store = Arc::new(CredentialStore::new());
        store.upsert(StoreKey::for_model("good"), SecretValue::new("sk-good"));

        let mut routes = HashMap::new();
        routes.insert(
            "openai".to_string(),
            ProviderRoute::new().with_api_key_location("dynamic::store_good"),
        );
        routes.insert(
            "anthropic".to_string(),
            ProviderRoute::new().with_api_key_location("dynamic::store_absent"),
        );
        routes.insert("bedrock".to_string(), ProviderRoute::new());

        let merged = merger(&store).merge_all(&routes, &HashMap::new());

        assert_eq!(merged.len(), 1);
        assert_eq!(merged.get("openai").unwrap().expose(), "sk-good");
        assert!(!merged.is_complete());
        assert_eq!(merged.failures().len(), 2);
    }

    #[test]
    fn test_merge_all_caller_map() {
        let store = Arc::new(CredentialStore::new());

        let mut routes = HashMap::new();
        routes.insert("openai".to_string(), ProviderRoute::new());

        let mut caller = HashMap::new();
        caller.insert("openai".to_string(), "sk-byok".to_string());

        let merged = merger(&store).merge_all(&routes, &caller);

        assert!(merged.is_complete());
        assert_eq!(merged.get("openai").unwrap().expose(), "sk-byok");
    }

    #[test]
    fn test_merge_all_malformed_location() {
        let store = Arc::new(CredentialStore::new());

        let mut routes = HashMap::new();
        routes.insert(
            "openai".to_string(),
            ProviderRoute::new().with_api_key_location("dynamic::not-a-store-key"),
        );

        let merged = merger(&store).merge_all(&routes, &HashMap::new());

        assert!(merged.is_empty());
        assert!(matches!(
            merged.failures()[0].1,
            ResolveError::MalformedLocation(_)
        ));
    }
}

//! Model and provider-route configuration types
//!
//! These types describe a catalog entry *after* the ingestion filter
//! has run: there is deliberately no credential field here. The only
//! trace of credential sourcing is the `api_key_location` descriptor
//! on each provider route.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A single model entry from the live catalog, keyed externally by
/// model identifier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelEntry {
    /// Display name for the model
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Provider routes this model can be served through, keyed by
    /// provider name (openai, anthropic, etc.)
    #[serde(default)]
    pub providers: HashMap<String, ProviderRoute>,
    /// Maximum context length in tokens
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_length: Option<u32>,
    /// Whether this model is currently served (default: true)
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl ModelEntry {
    /// Create an empty entry
    pub fn new() -> Self {
        Self {
            name: None,
            providers: HashMap::new(),
            context_length: None,
            enabled: true,
        }
    }

    /// Set the display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Add a provider route
    pub fn with_provider(mut self, provider: impl Into<String>, route: ProviderRoute) -> Self {
        self.providers.insert(provider.into(), route);
        self
    }

    /// Set the context length
    pub fn with_context_length(mut self, length: u32) -> Self {
        self.context_length = Some(length);
        self
    }

    /// Parse an entry from a scrubbed JSON value
    pub fn from_value(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }
}

impl Default for ModelEntry {
    fn default() -> Self {
        Self::new()
    }
}

/// How a model reaches one upstream provider
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderRoute {
    /// Credential location descriptor, e.g. `dynamic::store_gpt4-x`,
    /// `env::OPENAI_API_KEY`, or a static literal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key_location: Option<String>,
    /// Custom API base URL (provider default if not set)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_base: Option<String>,
    /// Model identifier as used by the provider's API
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl ProviderRoute {
    /// Create an empty route
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the credential location descriptor
    pub fn with_api_key_location(mut self, descriptor: impl Into<String>) -> Self {
        self.api_key_location = Some(descriptor.into());
        self
    }

    /// Set the API base URL
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = Some(base.into());
        self
    }

    /// Set the provider-side model identifier
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_entry_builder() {
        let entry = ModelEntry::new()
            .with_name("GPT-4 Mix")
            .with_context_length(128_000)
            .with_provider(
                "openai",
                ProviderRoute::new()
                    .with_api_key_location("dynamic::store_gpt4-x")
                    .with_model("gpt-4"),
            );

        assert_eq!(entry.name.as_deref(), Some("GPT-4 Mix"));
        assert_eq!(entry.context_length, Some(128_000));
        assert!(entry.enabled);

        let route = &entry.providers["openai"];
        assert_eq!(
            route.api_key_location.as_deref(),
            Some("dynamic::store_gpt4-x")
        );
    }

    #[test]
    fn test_model_entry_from_value() {
        let value = serde_json::json!({
            "name": "gpt4-x",
            "providers": {
                "openai": { "api_key_location": "dynamic::store_gpt4-x" }
            }
        });

        let entry = ModelEntry::from_value(value).unwrap();
        assert!(entry.enabled);
        assert_eq!(entry.providers.len(), 1);
    }

    #[test]
    fn test_model_entry_has_no_credential_field() {
        let entry = ModelEntry::new().with_provider(
            "openai",
            ProviderRoute::new().with_api_key_location("env::OPENAI_API_KEY"),
        );

        let json = serde_json::to_string(&entry).unwrap();
        assert!(!json.contains("api_key\""));
        assert!(json.contains("api_key_location"));
    }
}

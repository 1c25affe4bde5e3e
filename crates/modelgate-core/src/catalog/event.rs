//! Catalog feed events

use serde_json::Value;

/// One model-configuration update delivered by the feed
///
/// The transport (delivery, reconnection, at-least-once semantics) is
/// the publisher's concern; this type is the contract at the boundary.
/// Events for the same model must be delivered in publish order;
/// events for different models carry no relative ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogEvent {
    /// A model was added or replaced; the raw entry may carry an
    /// embedded credential field
    Upsert { model_id: String, entry: Value },
    /// A model was deleted; the identifier alone is enough to derive
    /// the store key
    Delete { model_id: String },
}

impl CatalogEvent {
    /// Convenience constructor for an add/replace event
    pub fn upsert(model_id: impl Into<String>, entry: Value) -> Self {
        Self::Upsert {
            model_id: model_id.into(),
            entry,
        }
    }

    /// Convenience constructor for a delete event
    pub fn delete(model_id: impl Into<String>) -> Self {
        Self::Delete {
            model_id: model_id.into(),
        }
    }

    /// The model this event affects
    pub fn model_id(&self) -> &str {
        match self {
            Self::Upsert { model_id, .. } | Self::Delete { model_id } => model_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_event_model_id() {
        let upsert = CatalogEvent::upsert("gpt4-x", json!({}));
        let delete = CatalogEvent::delete("gpt4-x");

        assert_eq!(upsert.model_id(), "gpt4-x");
        assert_eq!(delete.model_id(), "gpt4-x");
    }
}

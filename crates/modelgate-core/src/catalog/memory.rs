//! In-memory catalog source

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::event::CatalogEvent;
use super::traits::CatalogSource;

/// Channel-backed catalog source for driving the reconciler in tests
///
/// Events arrive in send order, which matches the per-model ordering
/// guarantee a real feed adapter must provide.
pub struct MemoryCatalogSource {
    events: mpsc::Receiver<CatalogEvent>,
}

impl MemoryCatalogSource {
    /// Create a source plus the sender that feeds it
    pub fn channel(capacity: usize) -> (mpsc::Sender<CatalogEvent>, Self) {
        let (tx, rx) = mpsc::channel(capacity);
        (tx, Self { events: rx })
    }

    /// Create a source pre-seeded with events; it ends after the last
    pub fn from_events(events: Vec<CatalogEvent>) -> Self {
        let (tx, source) = Self::channel(events.len().max(1));
        for event in events {
            // Capacity covers every event, so this cannot fail
            tx.try_send(event).ok();
        }
        source
    }
}

#[async_trait]
impl CatalogSource for MemoryCatalogSource {
    async fn next_event(&mut self) -> Option<CatalogEvent> {
        self.events.recv().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_memory_source_yields_in_order() {
        let mut source = MemoryCatalogSource::from_events(vec![
            CatalogEvent::upsert("m", json!({ "api_key": "sk-AAA" })),
            CatalogEvent::delete("m"),
        ]);

        assert!(matches!(
            source.next_event().await,
            Some(CatalogEvent::Upsert { .. })
        ));
        assert!(matches!(
            source.next_event().await,
            Some(CatalogEvent::Delete { .. })
        ));
        assert!(source.next_event().await.is_none());
    }

    #[tokio::test]
    async fn test_memory_source_channel_ends_on_sender_drop() {
        let (tx, mut source) = MemoryCatalogSource::channel(4);
        tx.send(CatalogEvent::delete("m")).await.unwrap();
        drop(tx);

        assert!(source.next_event().await.is_some());
        assert!(source.next_event().await.is_none());
    }
}

//! Catalog source trait

use async_trait::async_trait;

use super::event::CatalogEvent;

/// Source of catalog events consumed by the lifecycle reconciler
///
/// Implementations:
/// - `MemoryCatalogSource`: channel-backed, for tests
/// - Feed adapters: wrap the real pub/sub subscription
#[async_trait]
pub trait CatalogSource: Send {
    /// Wait for the next event
    ///
    /// Returns `None` when the feed has shut down; the reconciler loop
    /// exits at that point. Implementations must yield events for the
    /// same model in the order they were published.
    async fn next_event(&mut self) -> Option<CatalogEvent>;
}

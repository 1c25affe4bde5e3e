//! Store reconciliation against the live catalog

use std::sync::Arc;

use serde_json::Value;
use tokio::sync::mpsc;

use crate::catalog::{CatalogEvent, CatalogSource};
use crate::ingest::{IngestAction, IngestionFilter};
use crate::logging::SharedLogger;
use crate::secrets::{CredentialStore, StoreKey};
use crate::{log_debug, log_info, log_warn};

/// Result of applying one catalog event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// Model added or replaced; the scrubbed entry continues to
    /// configuration parsing
    Upserted {
        model_id: String,
        entry: Value,
        ingest: IngestAction,
    },
    /// Model deleted; `existed` reports whether a store entry was
    /// actually removed
    Deleted { model_id: String, existed: bool },
}

/// Keeps the credential store consistent with the model catalog
///
/// Every transition is idempotent: removing an absent key and
/// upserting a fresh one are both defined, non-error operations, so
/// replaying feed events is safe. The store never self-evicts; the
/// only path from `Present` to `Absent` is a delete or a
/// replace-without-credential event passing through here.
pub struct LifecycleReconciler {
    store: Arc<CredentialStore>,
    filter: IngestionFilter,
    logger: SharedLogger,
}

impl LifecycleReconciler {
    /// Create a reconciler over an injected store
    pub fn new(store: Arc<CredentialStore>, logger: SharedLogger) -> Self {
        let filter = IngestionFilter::new(Arc::clone(&store), Arc::clone(&logger));
        Self {
            store,
            filter,
            logger,
        }
    }

    /// Apply a single catalog event to the store
    ///
    /// - Delete: remove the key (no-op when already absent).
    /// - Upsert carrying a credential: extract-and-strip through the
    ///   ingestion filter; an existing key is rotated atomically, so
    ///   concurrent resolvers see the old value or the new one, never
    ///   neither.
    /// - Upsert without a credential: the model no longer owns a
    ///   stored key, so any existing entry is removed.
    /// - Upsert with a malformed credential: rejected by the filter;
    ///   a previously stored value is kept rather than destroyed by
    ///   an invalid replace.
    pub fn apply(&self, event: CatalogEvent) -> ReconcileOutcome {
        match event {
            CatalogEvent::Delete { model_id } => {
                let key = StoreKey::for_model(&model_id);
                let existed = self.store.remove(&key);
                if existed {
                    log_info!(self.logger, "model '{}': removed credential at {}", model_id, key);
                } else {
                    log_debug!(self.logger, "model '{}': delete with no stored credential", model_id);
                }
                ReconcileOutcome::Deleted { model_id, existed }
            }
            CatalogEvent::Upsert {
                model_id,
                mut entry,
            } => {
                let outcome = self.filter.ingest_entry(&model_id, &mut entry);
                if outcome.action == IngestAction::NoCredential {
                    let key = StoreKey::for_model(&model_id);
                    if self.store.remove(&key) {
                        log_info!(
                            self.logger,
                            "model '{}': replaced without credential, removed {}",
                            model_id,
                            key
                        );
                    }
                }
                ReconcileOutcome::Upserted {
                    model_id,
                    entry,
                    ingest: outcome.action,
                }
            }
        }
    }

    /// Drain a catalog source, applying events in arrival order
    ///
    /// A single consumer task preserves per-key ordering. Scrubbed
    /// outcomes are forwarded to `updates` for the configuration
    /// parser; the loop ends when the source or the downstream side
    /// shuts down.
    pub async fn run<S: CatalogSource>(
        &self,
        mut source: S,
        updates: mpsc::Sender<ReconcileOutcome>,
    ) {
        while let Some(event) = source.next_event().await {
            let outcome = self.apply(event);
            if updates.send(outcome).await.is_err() {
                log_warn!(self.logger, "update receiver dropped, stopping reconciler");
                break;
            }
        }
    }
}

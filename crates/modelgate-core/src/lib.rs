//! ModelGate Core
//!
//! Credential store and resolution pipeline for a model-serving
//! gateway whose catalog is updated live over a pub/sub feed.
//!
//! Data flow:
//!
//! ```text
//! feed event -> IngestionFilter (extract + strip) -> CredentialStore
//!                                                         |
//! inference call -> CredentialLocation::resolve ----------+
//!                -> CredentialMerger (caller wins) -> provider client
//! ```
//!
//! The store is the only shared mutable state; it is injected as an
//! `Arc<CredentialStore>` into every component that needs it so tests
//! can substitute their own instance. Secrets never appear in debug
//! output or serialized configuration, and their memory is zeroized
//! on drop and on rotation.
//!
//! ```rust
//! use std::sync::Arc;
//! use modelgate_core::catalog::CatalogEvent;
//! use modelgate_core::lifecycle::LifecycleReconciler;
//! use modelgate_core::logging::NoOpLogger;
//! use modelgate_core::resolver::CredentialLocation;
//! use modelgate_core::secrets::CredentialStore;
//!
//! let store = Arc::new(CredentialStore::new());
//! let reconciler = LifecycleReconciler::new(Arc::clone(&store), Arc::new(NoOpLogger::new()));
//!
//! reconciler.apply(CatalogEvent::upsert(
//!     "gpt4-x",
//!     serde_json::json!({ "api_key": "sk-AAA" }),
//! ));
//!
//! let location = CredentialLocation::parse("dynamic::store_gpt4-x").unwrap();
//! assert_eq!(location.resolve(&store).unwrap().expose(), "sk-AAA");
//! ```

pub mod catalog;
pub mod ingest;
pub mod lifecycle;
pub mod logging;
pub mod resolver;
pub mod secrets;
pub mod types;

// Re-export commonly used types
pub use catalog::{CatalogEvent, CatalogSource, MemoryCatalogSource};
pub use ingest::{IngestAction, IngestError, IngestOutcome, IngestResult, IngestionFilter};
pub use lifecycle::{LifecycleReconciler, ReconcileOutcome};
pub use logging::{ConsoleLogger, Logger, NoOpLogger, SharedLogger};
pub use resolver::{
    CredentialLocation, CredentialMerger, MergedCredentials, ResolveError, ResolveResult,
};
pub use secrets::{CredentialStore, SecretValue, StoreKey};
pub use types::{ModelEntry, ProviderRoute};

//! Config ingestion filtering
//!
//! The filter sits between the feed and configuration parsing: it
//! pulls embedded credentials out of raw model entries, upserts them
//! into the credential store, and strips them so the rest of the
//! system never sees a secret in configuration.

mod filter;

pub use filter::{
    IngestAction, IngestError, IngestOutcome, IngestResult, IngestionFilter, CREDENTIAL_FIELD,
};

//! Credential extraction from incoming catalog payloads

use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;

use crate::logging::SharedLogger;
use crate::secrets::{CredentialStore, SecretValue, StoreKey};
use crate::{log_info, log_warn};

/// Name of the credential-bearing field on a raw model entry
pub const CREDENTIAL_FIELD: &str = "api_key";

/// Errors that can occur during ingestion
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IngestError {
    /// The credential field on one entry was unusable; that entry is
    /// skipped, the rest of the batch proceeds.
    #[error("Invalid credential for model '{model_id}': {reason}")]
    Validation { model_id: String, reason: String },

    /// The payload as a whole was not an object keyed by model id.
    #[error("Catalog payload is not an object keyed by model id")]
    MalformedPayload,
}

pub type IngestResult<T> = Result<T, IngestError>;

/// What the filter did with one model entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestAction {
    /// A credential was extracted and stored for the first time
    StoredCredential,
    /// A credential replaced an existing one at the same store key
    RotatedCredential,
    /// The entry carried no credential field and was left untouched
    NoCredential,
    /// The entry carried a malformed credential and was not upserted
    Rejected(IngestError),
}

/// Per-entry result of an ingestion pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestOutcome {
    /// Model identifier the entry was keyed by
    pub model_id: String,
    /// What happened to the entry
    pub action: IngestAction,
}

impl IngestOutcome {
    /// Whether this entry was rejected
    pub fn is_rejected(&self) -> bool {
        matches!(self.action, IngestAction::Rejected(_))
    }
}

/// Extracts credentials from raw catalog payloads before they reach
/// configuration parsing
///
/// This is the single authorized path that adds secrets to the store
/// from external input. After a pass, the payload handed downstream
/// contains no `api_key` field on any entry.
pub struct IngestionFilter {
    store: Arc<CredentialStore>,
    logger: SharedLogger,
}

impl IngestionFilter {
    /// Create a filter writing into an injected store
    pub fn new(store: Arc<CredentialStore>, logger: SharedLogger) -> Self {
        Self { store, logger }
    }

    /// Process a raw catalog payload in place
    ///
    /// For each entry, in order: derive the store key from the model
    /// identifier; if a credential field is present and a non-empty
    /// string, upsert it into the store and strip the field; if the
    /// field is malformed, reject just that entry (the field is still
    /// stripped so no credential-shaped data continues downstream,
    /// but nothing is upserted); if absent, leave the entry untouched.
    pub fn ingest(&self, payload: &mut Value) -> IngestResult<Vec<IngestOutcome>> {
        let entries = payload
            .as_object_mut()
            .ok_or(IngestError::MalformedPayload)?;

        let mut outcomes = Vec::with_capacity(entries.len());
        for (model_id, entry) in entries.iter_mut() {
            outcomes.push(self.ingest_entry(model_id, entry));
        }
        Ok(outcomes)
    }

    /// Process a single model entry in place
    pub fn ingest_entry(&self, model_id: &str, entry: &mut Value) -> IngestOutcome {
        let action = match entry.as_object_mut() {
            Some(fields) => match fields.remove(CREDENTIAL_FIELD) {
                None => IngestAction::NoCredential,
                Some(Value::String(credential)) if !credential.is_empty() => {
                    let key = StoreKey::for_model(model_id);
                    let rotated = self.store.upsert(key.clone(), SecretValue::new(credential));
                    if rotated {
                        log_info!(self.logger, "model '{}': rotated credential at {}", model_id, key);
                        IngestAction::RotatedCredential
                    } else {
                        log_info!(self.logger, "model '{}': stored credential at {}", model_id, key);
                        IngestAction::StoredCredential
                    }
                }
                Some(Value::String(_)) => self.reject(model_id, "credential field is empty"),
                Some(_) => self.reject(model_id, "credential field is not a string"),
            },
            None => self.reject(model_id, "model entry is not an object"),
        };

        IngestOutcome {
            model_id: model_id.to_string(),
            action,
        }
    }

    fn reject(&self, model_id: &str, reason: &str) -> IngestAction {
        log_warn!(self.logger, "model '{}' rejected: {}", model_id, reason);
        IngestAction::Rejected(IngestError::Validation {
            model_id: model_id.to_string(),
            reason: reason.to_string(),
        })
    }
}

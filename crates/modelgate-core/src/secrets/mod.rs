//! Secure in-memory credential storage
//!
//! This module provides:
//! - `SecretValue`: a plaintext wrapper that redacts its output and
//!   zeroizes its memory on drop
//! - `StoreKey`: the deterministic `store_{model_id}` index
//! - `CredentialStore`: the concurrency-safe map shared between the
//!   feed writer and the inference-serving readers

mod key;
mod secret;
mod store;

pub use key::{StoreKey, STORE_KEY_PREFIX};
pub use secret::SecretValue;
pub use store::CredentialStore;

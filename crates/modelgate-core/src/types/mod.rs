//! Core types for the catalog-driven gateway
//!
//! Shared configuration shapes used across ingestion and resolution.

mod model;

pub use model::{ModelEntry, ProviderRoute};

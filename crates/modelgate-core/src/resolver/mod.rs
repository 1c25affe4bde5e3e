//! Call-time credential resolution
//!
//! - `CredentialLocation`: parsed `api_key_location` descriptors and
//!   their resolution against the live store
//! - `CredentialMerger`: caller-over-store precedence per provider
//! - `MergedCredentials`: the request-scoped result set

mod errors;
mod location;
mod merger;

pub use errors::{ResolveError, ResolveResult};
pub use location::CredentialLocation;
pub use merger::{CredentialMerger, MergedCredentials};

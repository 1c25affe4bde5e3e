//! Feed interface boundary
//!
//! The pub/sub transport itself lives outside this crate; what crosses
//! the boundary is a stream of [`CatalogEvent`]s pulled through the
//! [`CatalogSource`] trait.

mod event;
mod memory;
mod traits;

pub use event::CatalogEvent;
pub use memory::MemoryCatalogSource;
pub use traits::CatalogSource;

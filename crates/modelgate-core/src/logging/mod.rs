//! Runtime-agnostic logging
//!
//! Components take an injected [`SharedLogger`] so the embedding
//! gateway decides where log lines go.

mod console;
mod noop;
mod traits;

pub use console::ConsoleLogger;
pub use noop::NoOpLogger;
pub use traits::{Logger, SharedLogger};

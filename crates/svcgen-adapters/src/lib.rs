//! Infrastructure adapters for svcgen.
//!
//! This crate implements the ports defined in `svcgen-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod builtin_templates;
pub mod filesystem;

// Re-export commonly used adapters
pub use builtin_templates::BuiltinBlueprint;
pub use filesystem::{LocalFileSink, MemoryFileSink};

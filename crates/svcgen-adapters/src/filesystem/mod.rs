//! File sink adapters.

mod local;
mod memory;

pub use local::LocalFileSink;
pub use memory::MemoryFileSink;

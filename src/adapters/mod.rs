//! Adapters - Concrete implementations of the ports.

mod memory;

pub use memory::InMemoryProfileStore;

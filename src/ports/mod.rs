//! Ports - Interfaces to collaborators the engine does not manage.

mod profile_store;

pub use profile_store::{ProfileStore, StoreError};

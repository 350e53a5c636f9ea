//! Persistence collaborator for finished profiles.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::profile::FinishedProfile;

/// Errors surfaced by a profile store implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Failed to append profile to store: {reason}")]
    AppendFailed { reason: String },
}

/// Append-only store for finished profiles.
///
/// The engine hands over one serialized profile per completed session and
/// keeps no reference afterwards; it never reads back, updates, or deletes.
/// The storage format is entirely the implementation's concern.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Appends a finished profile to the store.
    async fn append(&self, profile: &FinishedProfile) -> Result<(), StoreError>;

    /// Number of profiles appended so far.
    async fn count(&self) -> Result<usize, StoreError>;
}

//! In-memory profile store, for tests and local development.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::profile::FinishedProfile;
use crate::ports::{ProfileStore, StoreError};

/// Append-only in-memory store.
#[derive(Debug, Default)]
pub struct InMemoryProfileStore {
    profiles: RwLock<Vec<FinishedProfile>>,
}

impl InMemoryProfileStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything appended so far, in append order.
    pub async fn snapshot(&self) -> Vec<FinishedProfile> {
        self.profiles.read().await.clone()
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn append(&self, profile: &FinishedProfile) -> Result<(), StoreError> {
        let mut profiles = self.profiles.write().await;
        profiles.push(profile.clone());
        debug!(
            profile_id = %profile.profile_id(),
            total = profiles.len(),
            "appended finished profile"
        );
        Ok(())
    }

    async fn count(&self) -> Result<usize, StoreError> {
        Ok(self.profiles.read().await.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{default_catalog, definitions::fields};
    use crate::domain::engine::ResponseRecorder;
    use crate::domain::inference::{default_rules, ProfileFinalizer};
    use crate::domain::profile::{AnswerValue, OnboardingProfile};

    fn finished_profile() -> FinishedProfile {
        let recorder = ResponseRecorder::new(default_catalog());
        let mut profile = OnboardingProfile::new();
        recorder
            .record_answer(&mut profile, fields::CATEGORY, AnswerValue::choice("customer"))
            .unwrap();
        ProfileFinalizer::new(default_rules()).finalize(profile).unwrap()
    }

    #[tokio::test]
    async fn append_grows_the_store_in_order() {
        let store = InMemoryProfileStore::new();
        let first = finished_profile();
        let second = finished_profile();

        store.append(&first).await.unwrap();
        store.append(&second).await.unwrap();

        assert_eq!(store.count().await.unwrap(), 2);
        let snapshot = store.snapshot().await;
        assert_eq!(snapshot[0].profile_id(), first.profile_id());
        assert_eq!(snapshot[1].profile_id(), second.profile_id());
    }

    #[tokio::test]
    async fn empty_store_counts_zero() {
        let store = InMemoryProfileStore::new();
        assert_eq!(store.count().await.unwrap(), 0);
        assert!(store.snapshot().await.is_empty());
    }
}

use std::collections::BTreeMap;

use tokio::sync::RwLock;

use crate::modules::activities::core::activity::ActivityRecord;
use crate::modules::activities::core::errors::ActivityError;
use crate::modules::activities::core::seed::seed_activities;
use crate::shared::infrastructure::activity_store::{ActivityStore, ActivityStoreError};

pub struct InMemoryActivityStore {
    activities: RwLock<BTreeMap<String, ActivityRecord>>,
    is_offline: bool,
}

impl InMemoryActivityStore {
    pub fn new(activities: BTreeMap<String, ActivityRecord>) -> Self {
        Self {
            activities: RwLock::new(activities),
            is_offline: false,
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed_activities())
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), ActivityStoreError> {
        if self.is_offline {
            return Err(ActivityStoreError::Backend("Activity store offline".into()));
        }
        Ok(())
    }

    async fn update<F>(&self, activity_name: &str, change: F) -> Result<(), ActivityStoreError>
    where
        F: FnOnce(&mut ActivityRecord) -> Result<(), ActivityError>,
    {
        self.ensure_online()?;
        let mut guard = self.activities.write().await;
        let record = guard
            .get_mut(activity_name)
            .ok_or_else(|| ActivityError::NotFound {
                activity: activity_name.to_string(),
            })?;
        change(record)?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl ActivityStore for InMemoryActivityStore {
    async fn list(&self) -> Result<BTreeMap<String, ActivityRecord>, ActivityStoreError> {
        self.ensure_online()?;
        Ok(self.activities.read().await.clone())
    }

    async fn sign_up(&self, activity_name: &str, email: &str) -> Result<(), ActivityStoreError> {
        self.update(activity_name, |record| record.enroll(email))
            .await
    }

    async fn unregister(&self, activity_name: &str, email: &str) -> Result<(), ActivityStoreError> {
        self.update(activity_name, |record| record.withdraw(email))
            .await
    }
}

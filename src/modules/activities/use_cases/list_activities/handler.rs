use std::collections::BTreeMap;
use std::sync::Arc;

use crate::modules::activities::core::activity::ActivityRecord;
use crate::modules::activities::use_cases::application_error::ApplicationError;
use crate::shared::infrastructure::activity_store::ActivityStore;

pub struct ListActivitiesHandler<TStore>
where
    TStore: ActivityStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> ListActivitiesHandler<TStore>
where
    TStore: ActivityStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    /// Snapshot of every activity keyed by name. The store lock is released
    /// before the caller serializes it.
    pub async fn handle(&self) -> Result<BTreeMap<String, ActivityRecord>, ApplicationError> {
        Ok(self.store.list().await?)
    }
}

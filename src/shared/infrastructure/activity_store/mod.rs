// Port for the activity directory.
//
// Handlers code against `ActivityStore`; the shell decides which adapter backs it.
// The membership rules live in the core, an adapter only has to apply them
// atomically per call.

pub mod in_memory;

use std::collections::BTreeMap;

use async_trait::async_trait;
use thiserror::Error;

use crate::modules::activities::core::activity::ActivityRecord;
use crate::modules::activities::core::errors::ActivityError;

#[derive(Debug, Error)]
pub enum ActivityStoreError {
    #[error(transparent)]
    Rejected(#[from] ActivityError),

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait ActivityStore: Send + Sync {
    async fn list(&self) -> Result<BTreeMap<String, ActivityRecord>, ActivityStoreError>;

    async fn sign_up(&self, activity_name: &str, email: &str) -> Result<(), ActivityStoreError>;

    async fn unregister(&self, activity_name: &str, email: &str)
    -> Result<(), ActivityStoreError>;
}

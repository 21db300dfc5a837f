use thiserror::Error;

use crate::modules::activities::core::errors::ActivityError;
use crate::shared::infrastructure::activity_store::ActivityStoreError;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(ActivityError),

    #[error("store unavailable: {0}")]
    Store(String),
}

impl From<ActivityStoreError> for ApplicationError {
    fn from(error: ActivityStoreError) -> Self {
        match error {
            ActivityStoreError::Rejected(reason) => ApplicationError::Domain(reason),
            ActivityStoreError::Backend(message) => ApplicationError::Store(message),
        }
    }
}

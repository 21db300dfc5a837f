use thiserror::Error;

/// Reasons the activity directory refuses a membership change.
///
/// The `Display` text is what callers see as the error detail.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ActivityError {
    #[error("Activity not found")]
    NotFound { activity: String },

    #[error("{email} is already signed up")]
    AlreadyRegistered { email: String },

    #[error("{email} is not signed up")]
    NotRegistered { email: String },
}

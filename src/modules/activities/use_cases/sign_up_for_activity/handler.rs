use std::sync::Arc;

use tracing::{info, warn};

use crate::modules::activities::use_cases::application_error::ApplicationError;
use crate::modules::activities::use_cases::sign_up_for_activity::command::SignUpForActivity;
use crate::shared::infrastructure::activity_store::ActivityStore;

pub struct SignUpForActivityHandler<TStore>
where
    TStore: ActivityStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> SignUpForActivityHandler<TStore>
where
    TStore: ActivityStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    /// Adds the email to the activity and returns the confirmation message.
    pub async fn handle(&self, command: SignUpForActivity) -> Result<String, ApplicationError> {
        let SignUpForActivity {
            activity_name,
            email,
        } = command;

        match self.store.sign_up(&activity_name, &email).await {
            Ok(()) => {
                info!(activity = %activity_name, %email, "participant signed up");
                Ok(format!("Signed up {email} for {activity_name}"))
            }
            Err(error) => {
                let error = ApplicationError::from(error);
                warn!(activity = %activity_name, %email, %error, "sign up rejected");
                Err(error)
            }
        }
    }
}

use std::sync::Arc;

use tracing::{info, warn};

use crate::modules::activities::use_cases::application_error::ApplicationError;
use crate::modules::activities::use_cases::unregister_from_activity::command::UnregisterFromActivity;
use crate::shared::infrastructure::activity_store::ActivityStore;

pub struct UnregisterFromActivityHandler<TStore>
where
    TStore: ActivityStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> UnregisterFromActivityHandler<TStore>
where
    TStore: ActivityStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        command: UnregisterFromActivity,
    ) -> Result<String, ApplicationError> {
        let UnregisterFromActivity {
            activity_name,
            email,
        } = command;

        match self.store.unregister(&activity_name, &email).await {
            Ok(()) => {
                info!(activity = %activity_name, %email, "participant unregistered");
                Ok(format!("Unregistered {email} from {activity_name}"))
            }
            Err(error) => {
                let error = ApplicationError::from(error);
                warn!(activity = %activity_name, %email, %error, "unregister rejected");
                Err(error)
            }
        }
    }
}

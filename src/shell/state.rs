use crate::modules::activities::use_cases::list_activities::handler::ListActivitiesHandler;
use crate::modules::activities::use_cases::sign_up_for_activity::handler::SignUpForActivityHandler;
use crate::modules::activities::use_cases::unregister_from_activity::handler::UnregisterFromActivityHandler;
use crate::shared::infrastructure::activity_store::in_memory::InMemoryActivityStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub list_handler: Arc<ListActivitiesHandler<InMemoryActivityStore>>,
    pub sign_up_handler: Arc<SignUpForActivityHandler<InMemoryActivityStore>>,
    pub unregister_handler: Arc<UnregisterFromActivityHandler<InMemoryActivityStore>>,
}

impl AppState {
    pub fn new(store: Arc<InMemoryActivityStore>) -> Self {
        Self {
            list_handler: Arc::new(ListActivitiesHandler::new(store.clone())),
            sign_up_handler: Arc::new(SignUpForActivityHandler::new(store.clone())),
            unregister_handler: Arc::new(UnregisterFromActivityHandler::new(store)),
        }
    }
}

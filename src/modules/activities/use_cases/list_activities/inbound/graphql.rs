use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::activities::core::activity::ActivityRecord;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlActivity {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl From<(String, ActivityRecord)> for GqlActivity {
    fn from((name, record): (String, ActivityRecord)) -> Self {
        Self {
            name,
            description: record.description,
            schedule: record.schedule,
            max_participants: record.max_participants,
            participants: record.participants,
        }
    }
}

#[derive(Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn activities(&self, context: &Context<'_>) -> GqlResult<Vec<GqlActivity>> {
        let state = context.data_unchecked::<AppState>();
        let activities = state
            .list_handler
            .handle()
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(activities.into_iter().map(Into::into).collect())
    }
}

use axum::{Json, extract::State, response::IntoResponse};

use crate::shared::http::responses;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match state.list_handler.handle().await {
        Ok(activities) => Json(activities).into_response(),
        Err(error) => responses::application_error(error),
    }
}

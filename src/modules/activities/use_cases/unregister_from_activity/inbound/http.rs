use axum::{
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::activities::use_cases::unregister_from_activity::command::UnregisterFromActivity;
use crate::shared::http::params::ParticipantParams;
use crate::shared::http::responses;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    activity_name: Result<Path<String>, PathRejection>,
    params: Result<Query<ParticipantParams>, QueryRejection>,
) -> impl IntoResponse {
    let Path(activity_name) = match activity_name {
        Ok(p) => p,
        Err(rejection) => return responses::unknown_activity(rejection),
    };
    let Query(params) = match params {
        Ok(p) => p,
        Err(rejection) => {
            return responses::detail(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text());
        }
    };

    let command = UnregisterFromActivity {
        activity_name,
        email: params.email,
    };

    match state.unregister_handler.handle(command).await {
        Ok(message) => responses::message(message),
        Err(error) => responses::application_error(error),
    }
}

use serde::Deserialize;

/// Query string shared by the signup and unregister endpoints.
#[derive(Debug, Deserialize)]
pub struct ParticipantParams {
    pub email: String,
}

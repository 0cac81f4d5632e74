//! API request and response types.

use serde::Serialize;
use webinarjam_client::RegisteredUser;

pub use crate::registration::Contact as RegisterRequest;

pub const REGISTERED_MESSAGE: &str = "Contact successfully registered for the webinar.";

/// Response after a successful registration.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user_id: Option<String>,
    pub live_room_url: Option<String>,
    pub replay_room_url: Option<String>,
    pub thank_you_url: Option<String>,
}

impl From<RegisteredUser> for RegisterResponse {
    fn from(user: RegisteredUser) -> Self {
        Self {
            message: REGISTERED_MESSAGE.to_string(),
            user_id: user.user_id,
            live_room_url: user.live_room_url,
            replay_room_url: user.replay_room_url,
            thank_you_url: user.thank_you_url,
        }
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

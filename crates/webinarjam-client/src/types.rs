//! Request and response types for the WebinarJam registration API.

use secrecy::SecretString;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Account and webinar identifiers sent with every registration.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub api_key: SecretString,
    pub webinar_id: String,
    pub schedule_id: String,
}

impl Credentials {
    pub fn new(
        api_key: impl Into<String>,
        webinar_id: impl Into<String>,
        schedule_id: impl Into<String>,
    ) -> Self {
        Self {
            api_key: SecretString::new(api_key.into()),
            webinar_id: webinar_id.into(),
            schedule_id: schedule_id.into(),
        }
    }
}

/// A validated attendee, with the full name already split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registrant {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

/// Form body posted to the register endpoint.
#[derive(Debug, Serialize)]
pub(crate) struct RegisterForm<'a> {
    pub api_key: &'a str,
    pub webinar_id: &'a str,
    pub schedule: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
}

/// Body returned by the register endpoint with HTTP 200.
///
/// WebinarJam reports business failures in-band, so a 200 is not a success
/// until `status` says so. Any JSON object is accepted; fields are inspected
/// loosely because their types are not guaranteed.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct RegisterResponse(Map<String, Value>);

impl RegisterResponse {
    pub fn is_success(&self) -> bool {
        self.0.get("status").and_then(Value::as_str) == Some("success")
    }

    /// Error text reported by the API, or "Unknown error" when absent.
    pub fn error_message(&self) -> String {
        match self.0.get("error") {
            Some(Value::String(message)) => message.clone(),
            Some(Value::Null) | None => "Unknown error".to_string(),
            Some(other) => other.to_string(),
        }
    }

    /// Decode the nested `user` object. A missing or null `user` yields
    /// an empty record.
    pub fn user(&self) -> Result<RegisteredUser, serde_json::Error> {
        match self.0.get("user") {
            None | Some(Value::Null) => Ok(RegisteredUser::default()),
            Some(user) => RegisteredUser::deserialize(user),
        }
    }
}

/// Registered attendee details. Any field may be missing upstream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredUser {
    #[serde(default, deserialize_with = "lenient_string")]
    pub user_id: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub live_room_url: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub replay_room_url: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub thank_you_url: Option<String>,
}

/// Accepts strings as-is and renders any other scalar (the API sends
/// numeric ids) as its JSON text.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

//! WebinarJam registration HTTP client.

use crate::error::WebinarJamError;
use crate::types::*;
use reqwest::header::{CONTENT_TYPE, USER_AGENT};
use reqwest::{Client, StatusCode};
use secrecy::ExposeSecret;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Public registration endpoint.
pub const DEFAULT_REGISTER_URL: &str = "https://api.webinarjam.com/webinarjam/register";

/// WebinarJam rejects requests without a browser-like agent.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// WebinarJam registration client.
///
/// The API key is stored using `SecretString` and only exposed while
/// encoding the form body.
#[derive(Clone)]
pub struct WebinarJamClient {
    client: Client,
    register_url: String,
    credentials: Credentials,
}

impl WebinarJamClient {
    /// Create a new WebinarJam client.
    pub fn new(
        credentials: Credentials,
        register_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, WebinarJamError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            register_url: register_url.into(),
            credentials,
        })
    }

    /// Get the configured endpoint.
    pub fn register_url(&self) -> &str {
        &self.register_url
    }

    /// Register an attendee for the configured webinar schedule.
    ///
    /// Makes exactly one attempt.
    #[instrument(skip(self, registrant), fields(webinar_id = %self.credentials.webinar_id))]
    pub async fn register(&self, registrant: &Registrant) -> Result<RegisteredUser, WebinarJamError> {
        let form = RegisterForm {
            api_key: self.credentials.api_key.expose_secret(),
            webinar_id: &self.credentials.webinar_id,
            schedule: &self.credentials.schedule_id,
            first_name: &registrant.first_name,
            last_name: &registrant.last_name,
            email: &registrant.email,
            phone: &registrant.phone,
        };

        debug!(url = %self.register_url, "Sending registration request");

        let response = self
            .client
            .post(&self.register_url)
            .header(USER_AGENT, BROWSER_USER_AGENT)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .form(&form)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        info!(status = %status, body = %body, "WebinarJam raw response");

        interpret_response(status, &body)
    }
}

/// Classify a register response. Anything but exactly 200 is an error.
fn interpret_response(status: StatusCode, body: &str) -> Result<RegisteredUser, WebinarJamError> {
    if status != StatusCode::OK {
        return Err(WebinarJamError::Api {
            status: status.as_u16(),
            body: body.to_string(),
        });
    }

    let parsed: RegisterResponse = serde_json::from_str(body)
        .map_err(|_| WebinarJamError::MalformedResponse(body.to_string()))?;

    if !parsed.is_success() {
        return Err(WebinarJamError::Rejected(parsed.error_message()));
    }

    parsed
        .user()
        .map_err(|_| WebinarJamError::MalformedResponse(body.to_string()))
}

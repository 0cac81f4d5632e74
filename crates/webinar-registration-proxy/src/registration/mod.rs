//! Registration adapter: validates contacts and forwards them to WebinarJam.

mod contact;

pub use contact::{normalize_email, split_name, Contact};

use crate::error::ProxyError;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{info, instrument, warn};
use webinarjam_client::{RegisteredUser, Registrant, WebinarJamClient, WebinarJamError};

/// Pause after every WebinarJam call. The API throttles bursts without
/// documenting a limit.
pub const REGISTRATION_COOLDOWN: Duration = Duration::from_secs(2);

/// Anything that can register an attendee with the remote webinar API.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Registrar: Send + Sync {
    async fn register(&self, registrant: &Registrant) -> Result<RegisteredUser, WebinarJamError>;
}

#[async_trait]
impl Registrar for WebinarJamClient {
    async fn register(&self, registrant: &Registrant) -> Result<RegisteredUser, WebinarJamError> {
        WebinarJamClient::register(self, registrant).await
    }
}

/// Turns a contact into exactly one registration outcome.
#[derive(Clone)]
pub struct RegistrationAdapter {
    registrar: Arc<dyn Registrar>,
    cooldown: Duration,
}

impl RegistrationAdapter {
    pub fn new(registrar: Arc<dyn Registrar>, cooldown: Duration) -> Self {
        Self {
            registrar,
            cooldown,
        }
    }

    /// Register a contact.
    ///
    /// Invalid contacts fail before the remote API is called. Once the call
    /// has been made, the adapter waits `cooldown` regardless of outcome.
    #[instrument(skip_all)]
    pub async fn register(&self, contact: &Contact) -> Result<RegisteredUser, ProxyError> {
        let registrant = contact.validate().inspect_err(|e| {
            warn!(error = %e, "Rejected contact");
        })?;

        let result = self.registrar.register(&registrant).await;

        sleep(self.cooldown).await;

        match &result {
            Ok(user) => info!(user_id = ?user.user_id, "Contact registered"),
            Err(e) => warn!(error = %e, "Registration failed"),
        }

        result.map_err(ProxyError::from)
    }
}

//! Webinar Registration Proxy - registers contacts for a WebinarJam webinar.
//!
//! A single `POST /register` endpoint validates a contact, forwards it to the
//! WebinarJam registration API and maps the answer onto a small JSON payload
//! or an error status.

pub mod api;
pub mod config;
pub mod error;
pub mod registration;

pub use config::{Config, ConfigProvider};
pub use error::ProxyError;
pub use registration::{Contact, RegistrationAdapter, Registrar};

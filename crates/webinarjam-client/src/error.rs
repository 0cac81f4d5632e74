//! WebinarJam client errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WebinarJamError {
    /// The request never produced a readable response.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {body}")]
    Api { status: u16, body: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// HTTP 200 whose body reports a failed registration.
    #[error("Registration rejected: {0}")]
    Rejected(String),
}

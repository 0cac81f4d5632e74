//! Inbound contact data and its validation.

use crate::error::ProxyError;
use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;
use webinarjam_client::Registrant;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$",
    )
    .expect("email pattern is valid")
});

/// RFC 5321 path limit.
const MAX_EMAIL_LEN: usize = 254;

/// A contact as posted to `/register`.
#[derive(Debug, Clone, Deserialize)]
pub struct Contact {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl Contact {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }

    /// Check the contact and turn it into the attendee sent upstream.
    pub fn validate(&self) -> Result<Registrant, ProxyError> {
        let (first_name, last_name) = split_name(&self.name)
            .ok_or_else(|| ProxyError::Validation("Name must not be empty".into()))?;
        let email = normalize_email(&self.email).map_err(ProxyError::Validation)?;

        Ok(Registrant {
            first_name,
            last_name,
            email,
            phone: self.phone.clone(),
        })
    }
}

/// Split a full name into first name and the rest.
///
/// Returns `None` when the name has no non-whitespace characters.
pub fn split_name(name: &str) -> Option<(String, String)> {
    let mut parts = name.split_whitespace();
    let first = parts.next()?.to_string();
    let last = parts.collect::<Vec<_>>().join(" ");
    Some((first, last))
}

/// Validate email syntax, returning the trimmed address.
pub fn normalize_email(email: &str) -> Result<String, String> {
    let email = email.trim();

    if email.is_empty() {
        return Err("Email must not be empty".into());
    }

    if email.len() > MAX_EMAIL_LEN || !EMAIL_RE.is_match(email) {
        return Err(format!("Invalid email address: {}", email));
    }

    Ok(email.to_string())
}

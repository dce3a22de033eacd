use std::fmt;

use reqwest::Client;

use crate::{spotify::auth, success, utils, warning};

/// Bearer credential for the Web API.
///
/// `Debug` and `Display` only show a short prefix of the token.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Credential(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Credential({})", utils::redact_token(&self.0))
    }
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", utils::redact_token(&self.0))
    }
}

/// Holds the credential of one [`crate::spotify::WebApi`] instance.
///
/// There is no expiry tracking: a credential lives until the API answers
/// 401, at which point the request executor invalidates it and a fresh one
/// is acquired on the next attempt.
pub struct Session {
    credential: Option<Credential>,
    seed_url: String,
}

impl Session {
    pub fn new(seed_url: impl Into<String>) -> Self {
        Session {
            credential: None,
            seed_url: seed_url.into(),
        }
    }

    pub fn token(&self) -> Option<&Credential> {
        self.credential.as_ref()
    }

    pub fn store(&mut self, credential: Credential) {
        self.credential = Some(credential);
    }

    /// Drops the held credential, returning it.
    pub fn invalidate(&mut self) -> Option<Credential> {
        self.credential.take()
    }

    /// Scrapes a fresh credential from the seed page and stores it.
    ///
    /// Returns `false` when no token could be obtained; the caller then goes
    /// on without authentication instead of giving up.
    pub async fn acquire(&mut self, client: &Client) -> bool {
        match auth::fetch_page_token(client, &self.seed_url).await {
            Some(token) => {
                let credential = Credential::new(token);
                success!("Got new token {} from Spotify Web", credential);
                self.store(credential);
                true
            }
            None => {
                warning!("Unable to retrieve new token from Spotify Web");
                false
            }
        }
    }
}

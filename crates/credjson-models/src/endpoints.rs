//! Default OAuth2 endpoints and the URI back-fill they feed.

use serde::{Deserialize, Serialize};

/// Default Google OAuth2 token endpoint.
pub const GOOGLE_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

/// Default Google OAuth2 revoke endpoint.
pub const GOOGLE_REVOKE_URI: &str = "https://oauth2.googleapis.com/revoke";

/// Token and revoke endpoints written into documents that lack them.
///
/// # Examples
///
/// ```
/// use credjson_models::{Endpoints, GOOGLE_TOKEN_URI};
///
/// let defaults = Endpoints::default();
/// assert_eq!(defaults.token_uri, GOOGLE_TOKEN_URI);
///
/// let custom = Endpoints::default().with_token_uri("http://localhost:4000/token");
/// assert_eq!(custom.token_uri, "http://localhost:4000/token");
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Token endpoint URI.
    pub token_uri: String,
    /// Revoke endpoint URI.
    pub revoke_uri: String,
}

impl Endpoints {
    /// Create an endpoint pair from explicit URIs.
    pub fn new(token_uri: impl Into<String>, revoke_uri: impl Into<String>) -> Self {
        Self {
            token_uri: token_uri.into(),
            revoke_uri: revoke_uri.into(),
        }
    }

    /// Replace the token endpoint.
    #[must_use]
    pub fn with_token_uri(mut self, uri: impl Into<String>) -> Self {
        self.token_uri = uri.into();
        self
    }

    /// Replace the revoke endpoint.
    #[must_use]
    pub fn with_revoke_uri(mut self, uri: impl Into<String>) -> Self {
        self.revoke_uri = uri.into();
        self
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(GOOGLE_TOKEN_URI, GOOGLE_REVOKE_URI)
    }
}

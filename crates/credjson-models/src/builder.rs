//! # Credential document builder
//!
//! Fluent API for assembling a [`CredentialDocument`] from discrete field
//! values.
//!
//! ```rust
//! use credjson_models::{CredentialDocument, GOOGLE_REVOKE_URI};
//!
//! let doc = CredentialDocument::builder("authorized_user")
//!     .client_id("123")
//!     .client_secret("secret")
//!     .refresh_token("alabalaportocala")
//!     .include_optional_fields(true)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(doc.revoke_uri(), Some(GOOGLE_REVOKE_URI));
//! ```
//!
//! Only the fields belonging to the requested variant are copied into the
//! document. Anything the variant needs but the caller did not supply is
//! reported by validation as a missing field.

use std::collections::HashMap;
use std::str::FromStr;

use serde_json::{Map, Value};

use crate::credential_type::{
    CredentialType, CLIENT_EMAIL_FIELD, CLIENT_ID_FIELD, CLIENT_SECRET_FIELD, PRIVATE_KEY_FIELD,
    PRIVATE_KEY_ID_FIELD, REFRESH_TOKEN_FIELD, TYPE_FIELD,
};
use crate::document::{set_default_uris, CredentialDocument};
use crate::endpoints::Endpoints;
use crate::error::{CredentialError, DocumentViolation};

/// Builder for [`CredentialDocument`].
///
/// Created via [`CredentialDocument::builder`].
#[derive(Debug, Clone, Default)]
pub struct DocumentBuilder {
    credential_type: String,
    values: HashMap<&'static str, String>,
    include_optional_fields: bool,
    token_uri: Option<String>,
    revoke_uri: Option<String>,
}

impl DocumentBuilder {
    pub(crate) fn new(credential_type: impl Into<String>) -> Self {
        Self {
            credential_type: credential_type.into(),
            ..Self::default()
        }
    }

    fn set(mut self, field: &'static str, value: impl Into<String>) -> Self {
        self.values.insert(field, value.into());
        self
    }

    /// Set `client_id`.
    #[must_use]
    pub fn client_id(self, value: impl Into<String>) -> Self {
        self.set(CLIENT_ID_FIELD, value)
    }

    /// Set `client_email` (service accounts only).
    #[must_use]
    pub fn client_email(self, value: impl Into<String>) -> Self {
        self.set(CLIENT_EMAIL_FIELD, value)
    }

    /// Set `client_secret` (authorized users only).
    #[must_use]
    pub fn client_secret(self, value: impl Into<String>) -> Self {
        self.set(CLIENT_SECRET_FIELD, value)
    }

    /// Set `private_key` (service accounts only).
    #[must_use]
    pub fn private_key(self, value: impl Into<String>) -> Self {
        self.set(PRIVATE_KEY_FIELD, value)
    }

    /// Set `private_key_id` (service accounts only).
    #[must_use]
    pub fn private_key_id(self, value: impl Into<String>) -> Self {
        self.set(PRIVATE_KEY_ID_FIELD, value)
    }

    /// Set `refresh_token` (authorized users only).
    #[must_use]
    pub fn refresh_token(self, value: impl Into<String>) -> Self {
        self.set(REFRESH_TOKEN_FIELD, value)
    }

    /// Write `token_uri` / `revoke_uri` into the document.
    ///
    /// Off by default: without it the document carries neither URI.
    #[must_use]
    pub fn include_optional_fields(mut self, include: bool) -> Self {
        self.include_optional_fields = include;
        self
    }

    /// Override the token endpoint written by
    /// [`include_optional_fields`](Self::include_optional_fields).
    #[must_use]
    pub fn token_uri(mut self, uri: impl Into<String>) -> Self {
        self.token_uri = Some(uri.into());
        self
    }

    /// Override the revoke endpoint written by
    /// [`include_optional_fields`](Self::include_optional_fields).
    #[must_use]
    pub fn revoke_uri(mut self, uri: impl Into<String>) -> Self {
        self.revoke_uri = Some(uri.into());
        self
    }

    /// Override both endpoints at once.
    #[must_use]
    pub fn endpoints(mut self, endpoints: Endpoints) -> Self {
        self.token_uri = Some(endpoints.token_uri);
        self.revoke_uri = Some(endpoints.revoke_uri);
        self
    }

    /// Assemble and validate the document.
    ///
    /// # Errors
    ///
    /// [`DocumentViolation::UnknownType`] if the variant tag is not
    /// recognised (checked before anything else), or
    /// [`DocumentViolation::MissingFields`] if a field the variant requires
    /// was not supplied.
    pub fn build(mut self) -> Result<CredentialDocument, CredentialError> {
        let credential_type = CredentialType::from_str(&self.credential_type).map_err(|_| {
            DocumentViolation::UnknownType {
                found: Some(self.credential_type.clone()),
            }
        })?;

        let mut fields = Map::new();
        fields.insert(
            TYPE_FIELD.to_string(),
            Value::String(credential_type.to_string()),
        );
        for field in credential_type.required_fields() {
            if let Some(value) = self.values.remove(field) {
                fields.insert((*field).to_string(), Value::String(value));
            }
        }

        if self.include_optional_fields {
            let defaults = Endpoints::default();
            let endpoints = Endpoints::new(
                self.token_uri.unwrap_or(defaults.token_uri),
                self.revoke_uri.unwrap_or(defaults.revoke_uri),
            );
            set_default_uris(&mut fields, &endpoints);
        }

        CredentialDocument::from_map(fields)
    }
}

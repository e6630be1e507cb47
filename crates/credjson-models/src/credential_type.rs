//! Credential variants and their field tables.
//!
//! The required-field sets live in [`REQUIRED_FIELDS`], keyed by variant.
//! Validation and the document builder both read from that table, so adding
//! a variant means adding one enum arm and one table row.

use serde::{Deserialize, Serialize};

/// Name of the discriminant field.
pub const TYPE_FIELD: &str = "type";
/// OAuth2 client identifier.
pub const CLIENT_ID_FIELD: &str = "client_id";
/// Service account email.
pub const CLIENT_EMAIL_FIELD: &str = "client_email";
/// Hint identifying the service account signing key.
pub const PRIVATE_KEY_ID_FIELD: &str = "private_key_id";
/// Service account signing key, typically PEM.
pub const PRIVATE_KEY_FIELD: &str = "private_key";
/// OAuth2 client secret.
pub const CLIENT_SECRET_FIELD: &str = "client_secret";
/// Long-lived OAuth2 refresh token.
pub const REFRESH_TOKEN_FIELD: &str = "refresh_token";
/// Optional token endpoint override.
pub const TOKEN_URI_FIELD: &str = "token_uri";
/// Optional revoke endpoint override.
pub const REVOKE_URI_FIELD: &str = "revoke_uri";

/// The two credential document variants.
///
/// # Examples
///
/// ```
/// use credjson_models::CredentialType;
///
/// let t: CredentialType = "authorized_user".parse().unwrap();
/// assert_eq!(t, CredentialType::AuthorizedUser);
/// assert_eq!(t.to_string(), "authorized_user");
/// ```
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CredentialType {
    /// Server-to-server credential identified by a private signing key.
    ServiceAccount,
    /// Delegated end-user credential identified by a refresh token.
    AuthorizedUser,
}

/// Required fields per variant, discriminant included.
pub const REQUIRED_FIELDS: &[(CredentialType, &[&str])] = &[
    (
        CredentialType::ServiceAccount,
        &[
            TYPE_FIELD,
            CLIENT_ID_FIELD,
            CLIENT_EMAIL_FIELD,
            PRIVATE_KEY_ID_FIELD,
            PRIVATE_KEY_FIELD,
        ],
    ),
    (
        CredentialType::AuthorizedUser,
        &[
            TYPE_FIELD,
            CLIENT_ID_FIELD,
            CLIENT_SECRET_FIELD,
            REFRESH_TOKEN_FIELD,
        ],
    ),
];

/// Fields that either variant may carry and that get back-filled.
pub const OPTIONAL_FIELDS: &[&str] = &[TOKEN_URI_FIELD, REVOKE_URI_FIELD];

impl CredentialType {
    /// Fields a document of this variant must define, `type` included.
    pub fn required_fields(self) -> &'static [&'static str] {
        REQUIRED_FIELDS
            .iter()
            .find(|(t, _)| *t == self)
            .map_or(&[], |(_, fields)| fields)
    }

    /// Return the wire string for this variant.
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

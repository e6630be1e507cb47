//! Error types for the `credjson-models` crate.
//!
//! Every fallible operation in this crate returns a [`CredentialError`].
//! Schema failures are grouped under
//! [`CredentialError::InvalidCredentialDocument`] and carry a
//! [`DocumentViolation`] describing the precise cause; anything the JSON
//! decoder rejects surfaces as [`CredentialError::MalformedInput`]. Output
//! failures are kept apart in [`CredentialError::Serialization`].

use crate::credential_type::CredentialType;

/// The reason a credential document failed schema validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DocumentViolation {
    /// The decoded document was JSON `null`.
    #[error("empty credential object")]
    EmptyDocument,

    /// The decoded document was valid JSON but not an object.
    #[error("credential document must be a JSON object")]
    NotAnObject,

    /// The `type` field is absent or holds an unrecognised value.
    #[error(
        "'type' field should be defined (and have one of the '{}' or '{}' values), found {}",
        CredentialType::AuthorizedUser,
        CredentialType::ServiceAccount,
        describe_found(.found)
    )]
    UnknownType {
        /// The offending value, or `None` when the field was missing.
        found: Option<String>,
    },

    /// Fields that must hold JSON strings hold some other value.
    ///
    /// Only raised when converting to a typed [`Credential`](crate::Credential);
    /// validation itself checks presence, not content.
    #[error("the following field(s) must be strings: {}", join_fields(.0))]
    NonStringFields(Vec<String>),

    /// One or more fields required by the document's variant are absent.
    ///
    /// Names are sorted alphabetically.
    #[error("the following field(s) must be defined: {}", join_fields(.0))]
    MissingFields(Vec<String>),
}

fn describe_found(found: &Option<String>) -> String {
    found
        .as_deref()
        .map_or_else(|| "nothing".to_string(), |t| format!("'{t}'"))
}

fn join_fields(fields: &[String]) -> String {
    fields.join(", ")
}

/// Errors produced when building, parsing or validating credential documents.
#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    /// The document (or the requested variant) fails schema validation.
    #[error("invalid credential document: {0}")]
    InvalidCredentialDocument(DocumentViolation),

    /// The input text or stream is not valid JSON, or could not be read.
    #[error("malformed credential input: {0}")]
    MalformedInput(#[from] serde_json::Error),

    /// Encoding a document, or writing the encoded text, failed.
    #[error("failed to serialize credential document: {0}")]
    Serialization(serde_json::Error),
}

impl CredentialError {
    /// Return the schema violation, if this is a validation error.
    pub fn violation(&self) -> Option<&DocumentViolation> {
        match self {
            Self::InvalidCredentialDocument(v) => Some(v),
            Self::MalformedInput(_) | Self::Serialization(_) => None,
        }
    }
}

impl From<DocumentViolation> for CredentialError {
    fn from(v: DocumentViolation) -> Self {
        Self::InvalidCredentialDocument(v)
    }
}

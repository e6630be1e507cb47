//! The credential document: a validated map of field names to values.
//!
//! A [`CredentialDocument`] is only ever handed out after it has passed
//! [`validate`]. Documents come from two places:
//!
//! - [`CredentialDocument::builder`] — assembled from explicit fields.
//! - [`CredentialDocument::from_json_str`] / [`CredentialDocument::from_reader`]
//!   — decoded from JSON text, back-filled with the default endpoints.
//!
//! Field values are opaque: only presence is checked. A JSON `null` counts
//! as absent.

use std::io::{Read, Write};
use std::str::FromStr;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::builder::DocumentBuilder;
use crate::credential::Credential;
use crate::credential_type::{
    CredentialType, CLIENT_EMAIL_FIELD, CLIENT_ID_FIELD, CLIENT_SECRET_FIELD, PRIVATE_KEY_FIELD,
    PRIVATE_KEY_ID_FIELD, REFRESH_TOKEN_FIELD, REVOKE_URI_FIELD, TOKEN_URI_FIELD, TYPE_FIELD,
};
use crate::endpoints::Endpoints;
use crate::error::{CredentialError, DocumentViolation};

// ---------------------------------------------------------------------------
// CredentialDocument
// ---------------------------------------------------------------------------

/// A validated credential document.
///
/// Serialises transparently as the underlying JSON object, preserving field
/// order and any keys outside the schema.
///
/// # Examples
///
/// ```
/// use credjson_models::{CredentialDocument, CredentialType, GOOGLE_TOKEN_URI};
///
/// let doc = CredentialDocument::from_json_str(
///     r#"{"type":"authorized_user","client_id":"123",
///         "client_secret":"secret","refresh_token":"alabalaportocala"}"#,
/// ).unwrap();
///
/// assert_eq!(doc.credential_type(), CredentialType::AuthorizedUser);
/// assert_eq!(doc.token_uri(), Some(GOOGLE_TOKEN_URI));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CredentialDocument {
    credential_type: CredentialType,
    fields: Map<String, Value>,
}

impl CredentialDocument {
    /// Start building a document of the given variant.
    ///
    /// The tag is checked when [`DocumentBuilder::build`] runs, before any
    /// field is looked at.
    pub fn builder(credential_type: impl Into<String>) -> DocumentBuilder {
        DocumentBuilder::new(credential_type)
    }

    // ── Parsing ──────────────────────────────────────────────────────

    /// Parse a document from JSON text, back-filling the default endpoints.
    ///
    /// # Errors
    ///
    /// [`CredentialError::MalformedInput`] if `s` is not JSON, or
    /// [`CredentialError::InvalidCredentialDocument`] if it fails validation.
    pub fn from_json_str(s: &str) -> Result<Self, CredentialError> {
        Self::from_value(serde_json::from_str(s)?)
    }

    /// Parse a document from a JSON byte slice.
    ///
    /// # Errors
    ///
    /// Same as [`CredentialDocument::from_json_str`].
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CredentialError> {
        Self::from_value(serde_json::from_slice(bytes)?)
    }

    /// Parse a document from a stream producing JSON text.
    ///
    /// The reader is consumed as far as the JSON decoder needs. Pass
    /// `&mut reader` to keep ownership of the stream.
    ///
    /// # Errors
    ///
    /// Same as [`CredentialDocument::from_json_str`]; read failures are
    /// reported as [`CredentialError::MalformedInput`].
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CredentialError> {
        Self::from_value(serde_json::from_reader(reader)?)
    }

    /// Validate an already-decoded JSON value, back-filling default endpoints.
    ///
    /// # Errors
    ///
    /// [`DocumentViolation::EmptyDocument`] for `null`,
    /// [`DocumentViolation::NotAnObject`] for any other non-object, plus the
    /// failures of [`validate`].
    pub fn from_value(value: Value) -> Result<Self, CredentialError> {
        let mut fields = match value {
            Value::Object(map) => map,
            Value::Null => return Err(DocumentViolation::EmptyDocument.into()),
            _ => return Err(DocumentViolation::NotAnObject.into()),
        };
        set_default_uris(&mut fields, &Endpoints::default());
        Self::from_map(fields)
    }

    /// Validate a JSON object as-is, without back-fill.
    ///
    /// # Errors
    ///
    /// See [`validate`].
    pub fn from_map(fields: Map<String, Value>) -> Result<Self, CredentialError> {
        let credential_type = validate(&fields)?;
        Ok(Self {
            credential_type,
            fields,
        })
    }

    // ── Accessors ────────────────────────────────────────────────────

    /// The document's variant.
    pub fn credential_type(&self) -> CredentialType {
        self.credential_type
    }

    /// Whether `field` is present with a non-null value.
    pub fn contains(&self, field: &str) -> bool {
        is_present(&self.fields, field)
    }

    /// Raw value of `field`.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Value of `field` when it is a JSON string.
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.fields.get(field).and_then(Value::as_str)
    }

    /// `client_id`.
    pub fn client_id(&self) -> Option<&str> {
        self.get_str(CLIENT_ID_FIELD)
    }

    /// `client_email` (service accounts).
    pub fn client_email(&self) -> Option<&str> {
        self.get_str(CLIENT_EMAIL_FIELD)
    }

    /// `client_secret` (authorized users).
    pub fn client_secret(&self) -> Option<&str> {
        self.get_str(CLIENT_SECRET_FIELD)
    }

    /// `private_key` (service accounts).
    pub fn private_key(&self) -> Option<&str> {
        self.get_str(PRIVATE_KEY_FIELD)
    }

    /// `private_key_id` (service accounts).
    pub fn private_key_id(&self) -> Option<&str> {
        self.get_str(PRIVATE_KEY_ID_FIELD)
    }

    /// `refresh_token` (authorized users).
    pub fn refresh_token(&self) -> Option<&str> {
        self.get_str(REFRESH_TOKEN_FIELD)
    }

    /// `token_uri`, if set.
    pub fn token_uri(&self) -> Option<&str> {
        self.get_str(TOKEN_URI_FIELD)
    }

    /// `revoke_uri`, if set.
    pub fn revoke_uri(&self) -> Option<&str> {
        self.get_str(REVOKE_URI_FIELD)
    }

    /// Iterate over all fields in document order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Borrow the underlying JSON object.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Consume the document, returning the underlying JSON object.
    pub fn into_map(self) -> Map<String, Value> {
        self.fields
    }

    // ── Serialisation ────────────────────────────────────────────────

    /// Compact JSON text.
    ///
    /// # Errors
    ///
    /// [`CredentialError::Serialization`] if encoding fails.
    pub fn to_json_string(&self) -> Result<String, CredentialError> {
        serde_json::to_string(self).map_err(CredentialError::Serialization)
    }

    /// Pretty-printed JSON text.
    ///
    /// # Errors
    ///
    /// [`CredentialError::Serialization`] if encoding fails.
    pub fn to_json_pretty(&self) -> Result<String, CredentialError> {
        serde_json::to_string_pretty(self).map_err(CredentialError::Serialization)
    }

    /// Write pretty-printed JSON to `writer`.
    ///
    /// # Errors
    ///
    /// [`CredentialError::Serialization`] if encoding or writing fails.
    pub fn to_writer<W: Write>(&self, writer: W) -> Result<(), CredentialError> {
        serde_json::to_writer_pretty(writer, self).map_err(CredentialError::Serialization)
    }

    /// Convert to the typed [`Credential`] view.
    ///
    /// # Errors
    ///
    /// [`DocumentViolation::NonStringFields`] when a required field or an
    /// endpoint URI holds a non-string value.
    pub fn to_credential(&self) -> Result<Credential, CredentialError> {
        Credential::try_from(self)
    }
}

impl Serialize for CredentialDocument {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}

impl FromStr for CredentialDocument {
    type Err = CredentialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_json_str(s)
    }
}

impl TryFrom<Value> for CredentialDocument {
    type Error = CredentialError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

impl From<CredentialDocument> for Value {
    fn from(doc: CredentialDocument) -> Self {
        Value::Object(doc.fields)
    }
}

impl AsRef<Map<String, Value>> for CredentialDocument {
    fn as_ref(&self) -> &Map<String, Value> {
        &self.fields
    }
}

// ---------------------------------------------------------------------------
// Back-fill & validation
// ---------------------------------------------------------------------------

/// Set `token_uri` and `revoke_uri` to `endpoints` where the keys are absent.
///
/// Existing values, explicit `null` included, are left untouched.
pub fn set_default_uris(fields: &mut Map<String, Value>, endpoints: &Endpoints) {
    set_if_absent(fields, TOKEN_URI_FIELD, &endpoints.token_uri);
    set_if_absent(fields, REVOKE_URI_FIELD, &endpoints.revoke_uri);
}

/// Check the discriminant and the variant's required fields.
///
/// Returns the variant on success. Missing field names are reported sorted
/// alphabetically.
///
/// # Errors
///
/// [`DocumentViolation::UnknownType`] when `type` is missing, not a string or
/// not one of the known variants; [`DocumentViolation::MissingFields`] when
/// the variant's required fields are not all present.
pub fn validate(fields: &Map<String, Value>) -> Result<CredentialType, CredentialError> {
    let credential_type = read_type(fields)?;

    let mut missing: Vec<String> = credential_type
        .required_fields()
        .iter()
        .filter(|field| !is_present(fields, field))
        .map(|field| (*field).to_string())
        .collect();

    if missing.is_empty() {
        return Ok(credential_type);
    }
    missing.sort_unstable();
    Err(DocumentViolation::MissingFields(missing).into())
}

fn read_type(fields: &Map<String, Value>) -> Result<CredentialType, DocumentViolation> {
    match fields.get(TYPE_FIELD) {
        None | Some(Value::Null) => Err(DocumentViolation::UnknownType { found: None }),
        Some(Value::String(s)) => {
            CredentialType::from_str(s).map_err(|_| DocumentViolation::UnknownType {
                found: Some(s.clone()),
            })
        }
        Some(other) => Err(DocumentViolation::UnknownType {
            found: Some(other.to_string()),
        }),
    }
}

fn is_present(fields: &Map<String, Value>, field: &str) -> bool {
    fields.get(field).is_some_and(|v| !v.is_null())
}

fn set_if_absent(fields: &mut Map<String, Value>, key: &str, value: &str) {
    if !fields.contains_key(key) {
        fields.insert(key.to_string(), Value::String(value.to_string()));
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

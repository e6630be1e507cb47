#![deny(missing_docs)]

//! # credjson models
//!
//! Validation and serialisation of Google credential JSON documents, the
//! format used for application default credentials.
//!
//! ## Document variants
//!
//! ```text
//! CredentialDocument
//! ├── type = "service_account"
//! │   └── client_id, client_email, private_key_id, private_key
//! └── type = "authorized_user"
//!     └── client_id, client_secret, refresh_token
//!
//! optional on both: token_uri, revoke_uri
//! ```
//!
//! ## Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`credential_type`] | Variant enum, field names, required-field table |
//! | [`document`] | `CredentialDocument`, parsing, validation, URI back-fill |
//! | [`builder`] | Fluent `DocumentBuilder` |
//! | [`credential`] | Typed `Credential` view |
//! | [`endpoints`] | Default OAuth2 endpoints |
//! | [`error`] | `CredentialError` and `DocumentViolation` |

pub mod builder;
pub mod credential;
pub mod credential_type;
pub mod document;
pub mod endpoints;
pub mod error;

// Re-export all public types at crate root for convenience.
pub use builder::*;
pub use credential::*;
pub use credential_type::*;
pub use document::*;
pub use endpoints::*;
pub use error::*;

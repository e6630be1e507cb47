//! CLI configuration.
//!
//! Built once from environment variables at startup and passed to the
//! command handlers.

use std::path::PathBuf;

use credjson_models::Endpoints;

/// Env var overriding the token endpoint used by `build`.
pub const TOKEN_URI_VAR: &str = "CREDJSON_TOKEN_URI";
/// Env var overriding the revoke endpoint used by `build`.
pub const REVOKE_URI_VAR: &str = "CREDJSON_REVOKE_URI";
/// Explicit credentials file path, as honoured by Google client libraries.
pub const CREDENTIALS_PATH_VAR: &str = "GOOGLE_APPLICATION_CREDENTIALS";

/// Global configuration shared by all subcommands.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Endpoints written by `build --include-optional-fields` when no
    /// explicit `--token-uri` / `--revoke-uri` is given.
    pub endpoints: Endpoints,
    /// Path named by `GOOGLE_APPLICATION_CREDENTIALS`, if set.
    pub credentials_path: Option<PathBuf>,
}

impl CliConfig {
    /// Build the configuration from environment variables.
    ///
    /// | Variable                         | Default                  |
    /// |----------------------------------|--------------------------|
    /// | `CREDJSON_TOKEN_URI`             | Google token endpoint    |
    /// | `CREDJSON_REVOKE_URI`            | Google revoke endpoint   |
    /// | `GOOGLE_APPLICATION_CREDENTIALS` | unset                    |
    ///
    /// Empty values are treated as unset.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let mut endpoints = Endpoints::default();
        if let Some(uri) = var(TOKEN_URI_VAR) {
            endpoints.token_uri = uri;
        }
        if let Some(uri) = var(REVOKE_URI_VAR) {
            endpoints.revoke_uri = uri;
        }

        Self {
            endpoints,
            credentials_path: var(CREDENTIALS_PATH_VAR).map(PathBuf::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use credjson_models::{GOOGLE_REVOKE_URI, GOOGLE_TOKEN_URI};

    use super::*;

    fn config_with(vars: &[(&str, &str)]) -> CliConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        CliConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_are_google_endpoints() {
        let cfg = config_with(&[]);
        assert_eq!(cfg.endpoints.token_uri, GOOGLE_TOKEN_URI);
        assert_eq!(cfg.endpoints.revoke_uri, GOOGLE_REVOKE_URI);
        assert!(cfg.credentials_path.is_none());
    }

    #[test]
    fn endpoint_overrides() {
        let cfg = config_with(&[
            (TOKEN_URI_VAR, "http://localhost:4000/token"),
            (REVOKE_URI_VAR, "http://localhost:4000/revoke"),
        ]);
        assert_eq!(cfg.endpoints.token_uri, "http://localhost:4000/token");
        assert_eq!(cfg.endpoints.revoke_uri, "http://localhost:4000/revoke");
    }

    #[test]
    fn empty_values_are_unset() {
        let cfg = config_with(&[(TOKEN_URI_VAR, ""), (CREDENTIALS_PATH_VAR, "")]);
        assert_eq!(cfg.endpoints.token_uri, GOOGLE_TOKEN_URI);
        assert!(cfg.credentials_path.is_none());
    }

    #[test]
    fn credentials_path_from_env() {
        let cfg = config_with(&[(CREDENTIALS_PATH_VAR, "/tmp/creds.json")]);
        assert_eq!(cfg.credentials_path, Some(PathBuf::from("/tmp/creds.json")));
    }
}

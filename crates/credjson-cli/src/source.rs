//! Where `validate` reads its document from.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use crate::config::CliConfig;

/// Directory (under the user config dir) where gcloud keeps credentials.
const GCLOUD_DIR: &str = "gcloud";
/// File name gcloud writes application default credentials to.
pub const WELL_KNOWN_FILE: &str = "application_default_credentials.json";

/// A readable origin for a credential document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input.
    Stdin,
    /// A file on disk.
    File(PathBuf),
}

impl InputSource {
    /// Pick the source from the command-line arguments.
    ///
    /// `-` or no path means stdin, unless `well_known` asks for the default
    /// credentials location.
    pub fn resolve(path: Option<&Path>, well_known: bool, config: &CliConfig) -> Result<Self> {
        match (path, well_known) {
            (Some(_), true) => bail!("a path and --well-known are mutually exclusive"),
            (None, true) => well_known_path(config)
                .map(Self::File)
                .context("could not determine the well-known credentials location"),
            (Some(p), false) if p != Path::new("-") => Ok(Self::File(p.to_path_buf())),
            _ => Ok(Self::Stdin),
        }
    }

    /// Open the source for streaming.
    ///
    /// The returned reader owns the file handle; dropping it closes the file
    /// whether or not parsing succeeded.
    pub fn open(&self) -> Result<Box<dyn Read>> {
        match self {
            Self::Stdin => Ok(Box::new(io::stdin().lock())),
            Self::File(path) => {
                let file = File::open(path)
                    .with_context(|| format!("failed to open {}", path.display()))?;
                Ok(Box::new(BufReader::new(file)))
            }
        }
    }

    /// Human-readable name for log lines and error context.
    pub fn describe(&self) -> String {
        match self {
            Self::Stdin => "<stdin>".to_string(),
            Self::File(path) => path.display().to_string(),
        }
    }
}

/// Location of the application default credentials file.
///
/// `GOOGLE_APPLICATION_CREDENTIALS` wins; otherwise the file gcloud writes
/// under the user config directory.
pub fn well_known_path(config: &CliConfig) -> Option<PathBuf> {
    if let Some(path) = &config.credentials_path {
        return Some(path.clone());
    }
    dirs::config_dir().map(|dir| dir.join(GCLOUD_DIR).join(WELL_KNOWN_FILE))
}

#[cfg(test)]
mod tests {
    use credjson_models::Endpoints;

    use super::*;

    fn config(credentials_path: Option<&str>) -> CliConfig {
        CliConfig {
            endpoints: Endpoints::default(),
            credentials_path: credentials_path.map(PathBuf::from),
        }
    }

    #[test]
    fn no_path_is_stdin() {
        let src = InputSource::resolve(None, false, &config(None)).unwrap();
        assert_eq!(src, InputSource::Stdin);
    }

    #[test]
    fn dash_is_stdin() {
        let src = InputSource::resolve(Some(Path::new("-")), false, &config(None)).unwrap();
        assert_eq!(src, InputSource::Stdin);
        assert_eq!(src.describe(), "<stdin>");
    }

    #[test]
    fn explicit_path_is_file() {
        let src =
            InputSource::resolve(Some(Path::new("creds.json")), false, &config(None)).unwrap();
        assert_eq!(src, InputSource::File(PathBuf::from("creds.json")));
    }

    #[test]
    fn path_and_well_known_conflict() {
        let res = InputSource::resolve(Some(Path::new("creds.json")), true, &config(None));
        assert!(res.is_err());
    }

    #[test]
    fn well_known_prefers_env_path() {
        let cfg = config(Some("/etc/creds.json"));
        let src = InputSource::resolve(None, true, &cfg).unwrap();
        assert_eq!(src, InputSource::File(PathBuf::from("/etc/creds.json")));
    }

    #[test]
    fn well_known_falls_back_to_gcloud_dir() {
        if let Some(path) = well_known_path(&config(None)) {
            assert!(path.ends_with("gcloud/application_default_credentials.json"));
        }
    }

    #[test]
    fn open_missing_file_fails_with_path() {
        let src = InputSource::File(PathBuf::from("/nonexistent/credjson/creds.json"));
        let err = src.open().err().unwrap();
        assert!(err.to_string().contains("/nonexistent/credjson/creds.json"));
    }
}

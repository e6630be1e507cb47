//! Subcommand handlers.
//!
//! Handlers write their output to a caller-supplied writer so tests can
//! capture it; `main` passes stdout.

use std::fs;
use std::io::Write;

use anyhow::{Context, Result};
use credjson_models::{CredentialDocument, Endpoints};
use tracing::{debug, info};

use crate::BuildArgs;
use crate::config::CliConfig;
use crate::source::InputSource;

/// `credjson validate` — parse, back-fill and validate one document.
pub fn validate(source: &InputSource, json: bool, out: &mut impl Write) -> Result<()> {
    let name = source.describe();
    debug!(source = %name, "reading credential document");

    let reader = source.open()?;
    let doc = CredentialDocument::from_reader(reader)
        .with_context(|| format!("{name} is not a valid credential document"))?;

    info!(
        source = %name,
        credential_type = %doc.credential_type(),
        "credential document valid"
    );

    if json {
        writeln!(out, "{}", doc.to_json_pretty()?)?;
    } else {
        writeln!(out, "{}", summary(&doc))?;
    }
    Ok(())
}

/// `credjson build` — assemble a document from flags and emit it.
pub fn build(args: &BuildArgs, config: &CliConfig, out: &mut impl Write) -> Result<()> {
    let doc = build_document(args, config)?;
    let rendered = doc.to_json_pretty()?;

    match &args.output {
        Some(path) => {
            fs::write(path, format!("{rendered}\n"))
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(
                path = %path.display(),
                credential_type = %doc.credential_type(),
                "credential document written"
            );
        }
        None => writeln!(out, "{rendered}")?,
    }
    Ok(())
}

/// Translate [`BuildArgs`] into a validated document.
pub fn build_document(args: &BuildArgs, config: &CliConfig) -> Result<CredentialDocument> {
    let private_key = match (&args.private_key, &args.private_key_file) {
        (Some(key), _) => Some(key.clone()),
        (None, Some(path)) => Some(
            fs::read_to_string(path)
                .with_context(|| format!("failed to read private key {}", path.display()))?,
        ),
        (None, None) => None,
    };

    let endpoints = Endpoints::new(
        args.token_uri
            .clone()
            .unwrap_or_else(|| config.endpoints.token_uri.clone()),
        args.revoke_uri
            .clone()
            .unwrap_or_else(|| config.endpoints.revoke_uri.clone()),
    );

    let mut builder = CredentialDocument::builder(args.credential_type.as_str())
        .include_optional_fields(args.include_optional_fields)
        .endpoints(endpoints);
    if let Some(v) = &args.client_id {
        builder = builder.client_id(v);
    }
    if let Some(v) = &args.client_email {
        builder = builder.client_email(v);
    }
    if let Some(v) = &args.client_secret {
        builder = builder.client_secret(v);
    }
    if let Some(v) = private_key {
        builder = builder.private_key(v);
    }
    if let Some(v) = &args.private_key_id {
        builder = builder.private_key_id(v);
    }
    if let Some(v) = &args.refresh_token {
        builder = builder.refresh_token(v);
    }

    let doc = builder.build().context("refusing to build credential document")?;
    debug!(
        credential_type = %doc.credential_type(),
        fields = doc.fields().count(),
        "document built"
    );
    Ok(doc)
}

/// One-line description that never includes secrets.
fn summary(doc: &CredentialDocument) -> String {
    format!(
        "valid {} credential: client_id={} token_uri={}",
        doc.credential_type(),
        doc.client_id().unwrap_or("-"),
        doc.token_uri().unwrap_or("-"),
    )
}

//! CLI command implementations

pub mod add;
pub mod init;
pub mod prompt;
pub mod schema;

pub use add::AddCommand;
pub use init::InitCommand;
pub use schema::SchemaCommand;

use anyhow::{bail, Context, Result};
use modgen::{ModgenConfig, SchemaIndex};
use modgen_cli_lib::SchemaLookup;
use std::path::PathBuf;

/// Schema files to try: the explicit `--schema` path, else the configured candidates
///
/// # Errors
///
/// Returns an error if an explicit path was given and does not exist.
fn schema_candidates(explicit: Option<&PathBuf>, config: &ModgenConfig) -> Result<Vec<PathBuf>> {
    match explicit {
        Some(path) if !path.exists() => bail!("Schema file not found: {}", path.display()),
        Some(path) => Ok(vec![path.clone()]),
        None => Ok(config.schema_candidates()),
    }
}

/// Load the schema, failing if none can be found or read
fn require_schema(explicit: Option<&PathBuf>, config: &ModgenConfig) -> Result<(PathBuf, SchemaIndex)> {
    let candidates = schema_candidates(explicit, config)?;

    match SchemaLookup::locate(&candidates) {
        SchemaLookup::Loaded { path, index } => Ok((path, index)),
        SchemaLookup::Unusable { path, error } => {
            Err(error).with_context(|| format!("Failed to load schema: {}", path.display()))
        }
        SchemaLookup::NotFound => {
            let looked: Vec<String> = candidates.iter().map(|p| p.display().to_string()).collect();
            bail!("No schema file found (looked in: {})", looked.join(", "))
        }
    }
}

//! Server bootstrap
//!
//! Copies the static Express/Prisma boilerplate into `src/`. Nothing here is
//! rendered; files that already exist are skipped.

use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::writer::{write_new_file, WriteOutcome};
use crate::templates::{TemplateStore, BOOTSTRAP_FILES};

/// Files written and skipped by `init`
#[derive(Debug, Default)]
pub struct BootstrapReport {
    /// Newly written files, relative to the project root
    pub written: Vec<PathBuf>,
    /// Files left alone because they already existed
    pub skipped: Vec<PathBuf>,
}

/// Write every bootstrap file under `project_root`
///
/// # Errors
///
/// Returns an error if a template override cannot be read or a file cannot be
/// written.
pub fn bootstrap(project_root: &Path, templates: &TemplateStore) -> Result<BootstrapReport> {
    let mut report = BootstrapReport::default();

    for file in BOOTSTRAP_FILES {
        let output = PathBuf::from(file.output);
        let content = templates.load(file.source, file.content)?;

        match write_new_file(project_root, &output, &content)? {
            WriteOutcome::Written => {
                debug!(path = file.output, "bootstrap file written");
                report.written.push(output);
            }
            WriteOutcome::AlreadyExists => {
                info!(path = file.output, "file already exists, skipping");
                report.skipped.push(output);
            }
        }
    }

    Ok(report)
}

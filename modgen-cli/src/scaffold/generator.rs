//! Module scaffold generator
//!
//! Renders the service, controller and route templates for one model and
//! writes them under the project root. Existing files are never overwritten.
//! When a schema is available and declares the model, its scalar fields are
//! passed to every template; otherwise templates render without field
//! knowledge.

use anyhow::{bail, Result};
use modgen::{load_schema, render, ModelDefinition, SchemaError, SchemaIndex};
use std::path::PathBuf;
use tracing::{debug, info, warn};

use super::writer::{write_new_file, WriteOutcome};
use crate::templates::{ModuleTemplate, TemplateStore, MODULE_TEMPLATES};

/// Outcome of looking for a schema file
#[derive(Debug)]
pub enum SchemaLookup {
    /// None of the candidate paths exists
    NotFound,
    /// A schema file was read and parsed
    Loaded {
        /// File the schema came from
        path: PathBuf,
        /// Parsed schema
        index: SchemaIndex,
    },
    /// A schema file exists but could not be read or parsed
    Unusable {
        /// Offending file
        path: PathBuf,
        /// Why it was rejected
        error: SchemaError,
    },
}

impl SchemaLookup {
    /// Try each candidate in order; the first existing file decides the outcome
    #[must_use]
    pub fn locate(candidates: &[PathBuf]) -> Self {
        for path in candidates {
            match load_schema(path) {
                Ok(None) => continue,
                Ok(Some(index)) => {
                    return Self::Loaded {
                        path: path.clone(),
                        index,
                    }
                }
                Err(error) => {
                    return Self::Unusable {
                        path: path.clone(),
                        error,
                    }
                }
            }
        }
        Self::NotFound
    }

    /// Parsed schema, if one was loaded
    #[must_use]
    pub const fn index(&self) -> Option<&SchemaIndex> {
        match self {
            Self::Loaded { index, .. } => Some(index),
            Self::NotFound | Self::Unusable { .. } => None,
        }
    }
}

/// Module scaffold generator
pub struct ModuleGenerator {
    /// Model name as typed by the user (e.g. "user", "blog-post")
    model_name: String,
    /// Project root directory
    project_root: PathBuf,
    /// Template lookup
    templates: TemplateStore,
    /// Schema fields of the model, when known
    fields: Option<ModelDefinition>,
}

impl ModuleGenerator {
    /// Create a new module generator
    ///
    /// # Errors
    ///
    /// Returns an error if the model name is empty or whitespace only.
    pub fn new(model_name: String, project_root: PathBuf, templates: TemplateStore) -> Result<Self> {
        if model_name.trim().is_empty() {
            bail!("Module name cannot be empty");
        }

        Ok(Self {
            model_name,
            project_root,
            templates,
            fields: None,
        })
    }

    /// Attach the model's fields from a schema lookup
    ///
    /// A missing schema, an unusable schema or a schema without this model
    /// all leave the generator field-agnostic.
    #[must_use]
    pub fn with_schema(mut self, lookup: &SchemaLookup) -> Self {
        match lookup {
            SchemaLookup::NotFound => {
                info!("no schema file found, generating without fields");
            }
            SchemaLookup::Unusable { path, error } => {
                warn!(path = %path.display(), %error, "ignoring schema file, generating without fields");
            }
            SchemaLookup::Loaded { path, index } => {
                if let Some((name, model)) = index.find_model(&self.model_name) {
                    info!(model = name, fields = model.len(), schema = %path.display(), "using schema fields");
                    self.fields = Some(model.clone());
                } else {
                    info!(model = %self.model_name, schema = %path.display(), "model not declared in schema, generating without fields");
                }
            }
        }
        self
    }

    /// Fields the templates will be rendered with
    #[must_use]
    pub const fn fields(&self) -> Option<&ModelDefinition> {
        self.fields.as_ref()
    }

    /// Render every module template without touching the filesystem
    ///
    /// # Errors
    ///
    /// Returns an error if a template override cannot be read.
    pub fn render_all(&self) -> Result<Vec<GeneratedFile>> {
        MODULE_TEMPLATES
            .iter()
            .map(|template| self.render_template(template))
            .collect()
    }

    /// Render and write every module file that does not exist yet
    ///
    /// # Errors
    ///
    /// Returns an error if a template cannot be read, or a directory or file
    /// cannot be created.
    pub fn generate(&self) -> Result<GenerationReport> {
        let mut report = GenerationReport::default();

        for template in MODULE_TEMPLATES {
            let path = template.output_path(&self.model_name);
            let full_path = self.project_root.join(&path);

            // skip before reading the template so overrides are not required
            // for files that already exist
            if full_path.exists() {
                info!(path = %path.display(), "file already exists, skipping");
                report.skipped.push(path);
                continue;
            }

            let file = self.render_template(template)?;
            match write_new_file(&self.project_root, &file.path, &file.content)? {
                WriteOutcome::Written => {
                    debug!(path = %file.path.display(), "generated");
                    report.generated.push(file);
                }
                WriteOutcome::AlreadyExists => {
                    info!(path = %file.path.display(), "file already exists, skipping");
                    report.skipped.push(file.path);
                }
            }
        }

        Ok(report)
    }

    fn render_template(&self, template: &ModuleTemplate) -> Result<GeneratedFile> {
        let text = self.templates.load(template.name, template.default)?;
        let content = render(&text, &self.model_name, self.fields.as_ref());

        Ok(GeneratedFile {
            path: template.output_path(&self.model_name),
            content,
            description: format!("{} {}", template.verb, template.category.as_str()),
        })
    }
}

/// Represents a generated file
#[derive(Debug)]
pub struct GeneratedFile {
    /// Relative path from project root
    pub path: PathBuf,
    /// File content
    pub content: String,
    /// File description for user feedback
    pub description: String,
}

/// Files written and skipped by one generation run
#[derive(Debug, Default)]
pub struct GenerationReport {
    /// Newly written files
    pub generated: Vec<GeneratedFile>,
    /// Paths left alone because they already existed
    pub skipped: Vec<PathBuf>,
}

//! Module generator command
//!
//! Generates the five services, the controller and the router for a model.
//! Field declarations come from the project's schema when it declares the
//! model.
//!
//! # Example
//!
//! ```bash
//! modgen add blog-post
//! modgen add user --schema prisma/schema.prisma
//! ```

use anyhow::{Context, Result};
use console::style;
use modgen::{ModgenConfig, Naming};
use modgen_cli_lib::{ModuleGenerator, SchemaLookup, TemplateStore};
use std::path::PathBuf;

use super::schema_candidates;

pub struct AddCommand {
    name: String,
    schema: Option<PathBuf>,
}

impl AddCommand {
    #[must_use]
    pub const fn new(name: String, schema: Option<PathBuf>) -> Self {
        Self { name, schema }
    }

    pub fn execute(&self, config: &ModgenConfig) -> Result<()> {
        println!(
            "\n{} {} {}",
            style("Generating module").cyan().bold(),
            style(&self.name).green().bold(),
            style("...").cyan().bold()
        );

        let candidates = schema_candidates(self.schema.as_ref(), config)?;
        let lookup = SchemaLookup::locate(&candidates);

        match &lookup {
            SchemaLookup::Loaded { path, .. } => {
                println!("  {} {}", style("schema").dim(), style(path.display()).dim());
            }
            SchemaLookup::Unusable { path, error } => {
                println!(
                    "  {} ignoring {}: {error}",
                    style("!").yellow().bold(),
                    path.display()
                );
            }
            SchemaLookup::NotFound => {
                println!("  {} no schema found, fields left empty", style("!").yellow().bold());
            }
        }

        let generator = ModuleGenerator::new(
            self.name.clone(),
            config.output.root.clone(),
            TemplateStore::new(config.template_dir()),
        )
        .context("Failed to create module generator")?
        .with_schema(&lookup);

        if lookup.index().is_some() && generator.fields().is_none() {
            println!(
                "  {} model {} not found in schema, fields left empty",
                style("!").yellow().bold(),
                style(Naming::to_pascal_case(&self.name)).bold()
            );
        }

        let report = generator
            .generate()
            .context("Failed to generate module files")?;

        println!(
            "\n{} {} files:",
            style("Generated").green().bold(),
            report.generated.len()
        );
        for file in &report.generated {
            println!(
                "  {} {} ({})",
                style("✓").green(),
                style(file.path.display()).dim(),
                style(&file.description).dim()
            );
        }

        if !report.skipped.is_empty() {
            println!(
                "\n{} {} existing files:",
                style("Skipped").yellow().bold(),
                report.skipped.len()
            );
            for path in &report.skipped {
                println!("  {} {}", style("-").yellow(), style(path.display()).dim());
            }
        }

        let lower = Naming::to_lower(&self.name);
        println!("\n{}", style("Next steps:").cyan().bold());
        println!(
            "  1. Import the router in src/app.ts: {}",
            style(format!("import {lower}Routes from \"./routes/{lower}Routes\";")).yellow()
        );
        println!(
            "  2. Mount it: {}",
            style(format!("app.use({lower}Routes);")).yellow()
        );

        Ok(())
    }
}

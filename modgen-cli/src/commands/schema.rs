//! Schema inspection command

use anyhow::{Context, Result};
use console::style;
use modgen::ModgenConfig;
use std::path::PathBuf;

use super::require_schema;

/// Print the models and enums the parser extracts
pub struct SchemaCommand {
    schema: Option<PathBuf>,
    json: bool,
}

impl SchemaCommand {
    #[must_use]
    pub const fn new(schema: Option<PathBuf>, json: bool) -> Self {
        Self { schema, json }
    }

    pub fn execute(&self, config: &ModgenConfig) -> Result<()> {
        let (path, index) = require_schema(self.schema.as_ref(), config)?;

        if self.json {
            let json = serde_json::to_string_pretty(&index).context("Failed to serialize schema")?;
            println!("{json}");
            return Ok(());
        }

        println!("{} {}", style("Schema").cyan().bold(), style(path.display()).dim());

        for (name, model) in index.models() {
            println!("\n{} {}", style("model").dim(), style(name).green().bold());
            let width = model.iter().map(|(field, _)| field.len()).max().unwrap_or(0);
            for (field, ty) in model.iter() {
                println!("  {field:<width$}  {}", style(ty).yellow());
            }
        }

        for definition in index.enums() {
            println!("\n{} {}", style("enum").dim(), style(&definition.name).green().bold());
            for value in &definition.values {
                println!("  {value}");
            }
        }

        if index.is_empty() {
            println!("\n{}", style("no models or enums declared").yellow());
        }

        Ok(())
    }
}

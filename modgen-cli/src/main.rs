//! modgen CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod commands;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use commands::{AddCommand, InitCommand, SchemaCommand};
use modgen::ModgenConfig;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "modgen")]
#[command(version)]
#[command(about = "Scaffold Express/Prisma modules from your schema", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Read configuration from this file instead of the standard locations
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Copy the server boilerplate into src/
    Init,
    /// Generate services, controller and router for a model
    Add {
        /// Model name (e.g. `user`, `blog-post`, `BlogPost`)
        name: String,
        /// Schema file to read fields from
        #[arg(long, value_name = "PATH")]
        schema: Option<PathBuf>,
    },
    /// Print the models and enums found in the schema
    Schema {
        /// Schema file to read
        #[arg(long, value_name = "PATH")]
        schema: Option<PathBuf>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    modgen::observability::init(cli.verbose)?;

    let config = match &cli.config {
        Some(path) => ModgenConfig::load_from(path),
        None => ModgenConfig::load(),
    }
    .context("Failed to load configuration")?;

    match cli.command {
        None => commands::prompt::run(&config)?,
        Some(Commands::Init) => InitCommand::execute(&config)?,
        Some(Commands::Add { name, schema }) => {
            AddCommand::new(name, schema).execute(&config)?;
        }
        Some(Commands::Schema { schema, json }) => {
            SchemaCommand::new(schema, json).execute(&config)?;
        }
    }

    Ok(())
}

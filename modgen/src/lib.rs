//! modgen: schema-driven template rendering for module scaffolding
//!
//! The engine behind the `modgen` CLI. It reads a Prisma-style schema, picks
//! the fields of one model, and renders TypeScript templates (services,
//! controllers, routes) for that model.
//!
//! # Quick Start
//!
//! ```rust
//! use modgen::{parse_schema, render};
//!
//! let index = parse_schema(
//!     "model User {\n  id Int @id\n  email String?\n  role Role\n}\nenum Role { ADMIN USER }",
//! );
//! let (_, fields) = index.find_model("user").unwrap();
//!
//! let out = render("export interface {{Model}} {\n{{fields}}}", "user", Some(fields));
//! assert_eq!(out, "export interface User {\n  id: number;\n  email?: string;\n  role: Role;\n}");
//! ```
//!
//! # Modules
//!
//! - [`schema`]: brace-matching schema parser
//! - [`render`]: placeholder substitution and field-block generation
//! - [`naming`]: case conversion and pluralization
//! - [`types`]: schema scalar to TypeScript type mapping
//! - [`config`]: layered configuration (figment)
//! - [`observability`]: tracing subscriber setup

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod error;
pub mod naming;
pub mod observability;
pub mod render;
pub mod schema;
pub mod types;

pub use config::ModgenConfig;
pub use error::{ConfigError, SchemaError};
pub use naming::{Naming, TemplateContext};
pub use render::{render, Placeholder};
pub use schema::{
    load_schema, parse_schema, EnumDefinition, FieldDefinition, ModelDefinition, SchemaIndex,
};

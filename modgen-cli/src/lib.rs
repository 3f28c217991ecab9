//! modgen CLI library

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub mod scaffold;
pub mod templates;

pub use scaffold::{bootstrap, GenerationReport, ModuleGenerator, SchemaLookup};
pub use templates::{TemplateStore, BOOTSTRAP_FILES, MODULE_TEMPLATES};

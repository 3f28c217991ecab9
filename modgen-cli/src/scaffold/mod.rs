//! Module generation and project bootstrap

pub mod bootstrap;
pub mod generator;
pub mod writer;

pub use bootstrap::{bootstrap, BootstrapReport};
pub use generator::{GeneratedFile, GenerationReport, ModuleGenerator, SchemaLookup};
pub use writer::{write_new_file, WriteOutcome};

//! Schema parser
//!
//! Extracts model, field and enum definitions from Prisma-style schema text:
//!
//! ```text
//! model User {
//!   id    Int     @id @default(autoincrement())
//!   email String? @unique
//!   role  Role    @default(USER)
//!   posts Post[]  @relation("author")
//! }
//!
//! enum Role {
//!   ADMIN
//!   USER
//! }
//! ```
//!
//! Only what code generation needs is kept: each model's scalar fields in
//! declaration order with their raw type token. Relation fields (any field
//! carrying a `@relation(` attribute) are dropped, and fields typed with a
//! declared enum are normalized to the enum name. Everything else the schema
//! language offers (attributes, block directives, datasource and generator
//! blocks) is ignored.

pub mod scanner;

use crate::error::SchemaError;
use indexmap::IndexMap;
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use crate::naming::Naming;

/// Marker that identifies a relation field's attribute text
const RELATION_MARKER: &str = "@relation(";

/// A single schema field with the optional marker split out
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDefinition {
    /// Field name
    pub name: String,
    /// Declared type without the trailing `?` (e.g. `Int`, `Post[]`, `Role`)
    pub declared_type: String,
    /// Whether the type carried the `?` marker
    pub optional: bool,
}

impl FieldDefinition {
    /// Split a stored type string into base type and optional flag
    #[must_use]
    pub fn new(name: &str, type_token: &str) -> Self {
        let (base, optional) = split_optional(type_token);
        Self {
            name: name.to_string(),
            declared_type: base.to_string(),
            optional,
        }
    }
}

/// Ordered mapping from field name to declared type
///
/// The optional marker stays on the stored type string (`String?`); at most one
/// `?` is kept, always at the end.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ModelDefinition {
    fields: IndexMap<String, String>,
}

impl ModelDefinition {
    /// Create an empty model definition
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a field
    ///
    /// Overwriting keeps the field's original position.
    pub fn insert(&mut self, name: impl Into<String>, type_token: &str) {
        let (base, optional) = split_optional(type_token);
        let stored = if optional {
            format!("{base}?")
        } else {
            base.to_string()
        };
        self.fields.insert(name.into(), stored);
    }

    /// Stored type string of a field, `?` included
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Whether the model declares a field with this name
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Number of fields
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the model has no fields
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate `(name, stored type)` pairs in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterate fields in declaration order with the optional marker split out
    pub fn fields(&self) -> impl Iterator<Item = FieldDefinition> + '_ {
        self.fields
            .iter()
            .map(|(name, ty)| FieldDefinition::new(name, ty))
    }
}

impl<N: Into<String>, T: AsRef<str>> FromIterator<(N, T)> for ModelDefinition {
    fn from_iter<I: IntoIterator<Item = (N, T)>>(iter: I) -> Self {
        let mut model = Self::new();
        for (name, ty) in iter {
            model.insert(name, ty.as_ref());
        }
        model
    }
}

/// A declared enum and its literal values
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumDefinition {
    /// Enum name
    pub name: String,
    /// Literal values in declaration order, without duplicates
    pub values: Vec<String>,
}

/// Every model and enum found in one schema text
///
/// Built once per scaffolding run and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SchemaIndex {
    models: IndexMap<String, ModelDefinition>,
    enums: IndexMap<String, EnumDefinition>,
}

impl SchemaIndex {
    /// Parse schema text, reporting why parsing failed
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::UnterminatedBlock`] if a block is never closed.
    pub fn try_parse(text: &str) -> Result<Self, SchemaError> {
        let blocks = scanner::blocks(text)?;

        // enums first: model field normalization depends on them
        let mut enums = IndexMap::new();
        for block in blocks.iter().filter(|b| b.kind == "enum") {
            let mut values: Vec<String> = Vec::new();
            for token in scanner::tokens(block.body) {
                if token.starts_with('@') || values.iter().any(|v| v == token) {
                    continue;
                }
                values.push(token.to_string());
            }
            debug!(name = block.name, values = values.len(), "parsed enum");
            enums.insert(
                block.name.to_string(),
                EnumDefinition {
                    name: block.name.to_string(),
                    values,
                },
            );
        }

        let mut models = IndexMap::new();
        for block in blocks.iter().filter(|b| b.kind == "model") {
            let mut model = parse_model_body(block.body);
            normalize_enum_fields(&mut model, &enums);
            debug!(name = block.name, fields = model.len(), "parsed model");
            models.insert(block.name.to_string(), model);
        }

        Ok(Self { models, enums })
    }

    /// Look up a model by its exact declared name
    #[must_use]
    pub fn model(&self, name: &str) -> Option<&ModelDefinition> {
        self.models.get(name)
    }

    /// Look up a model by a user-supplied model name
    ///
    /// Tries the exact name, then its `PascalCase` form (`blog-post` finds
    /// `BlogPost`), then a case-insensitive match.
    #[must_use]
    pub fn find_model(&self, model_name: &str) -> Option<(&str, &ModelDefinition)> {
        let pascal = Naming::to_pascal_case(model_name);

        self.models
            .get_key_value(model_name)
            .or_else(|| self.models.get_key_value(pascal.as_str()))
            .or_else(|| {
                self.models
                    .iter()
                    .find(|(name, _)| name.eq_ignore_ascii_case(&pascal))
            })
            .map(|(name, model)| (name.as_str(), model))
    }

    /// Iterate models in declaration order
    pub fn models(&self) -> impl Iterator<Item = (&str, &ModelDefinition)> {
        self.models.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Look up a declared enum
    #[must_use]
    pub fn enum_definition(&self, name: &str) -> Option<&EnumDefinition> {
        self.enums.get(name)
    }

    /// Iterate enums in declaration order
    pub fn enums(&self) -> impl Iterator<Item = &EnumDefinition> {
        self.enums.values()
    }

    /// Whether the schema declared no models and no enums
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.models.is_empty() && self.enums.is_empty()
    }
}

/// Parse schema text, never failing
///
/// Malformed input is logged and yields an empty index; callers treat a
/// missing model as "no field knowledge", not as an error. Use
/// [`SchemaIndex::try_parse`] to get the failure reason instead.
#[must_use]
pub fn parse_schema(text: &str) -> SchemaIndex {
    SchemaIndex::try_parse(text).unwrap_or_else(|err| {
        warn!(error = %err, "schema could not be parsed, continuing without fields");
        SchemaIndex::default()
    })
}

/// Read and parse a schema file
///
/// Returns `Ok(None)` when no file exists at `path`.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read, or if its contents
/// cannot be parsed.
pub fn load_schema(path: &Path) -> Result<Option<SchemaIndex>, SchemaError> {
    if !path.exists() {
        debug!(path = %path.display(), "no schema file");
        return Ok(None);
    }

    let text = fs::read_to_string(path).map_err(|source| SchemaError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    SchemaIndex::try_parse(&text).map(Some)
}

struct RawField<'a> {
    name: &'a str,
    type_token: &'a str,
    attributes: Vec<&'a str>,
}

impl RawField<'_> {
    fn is_relation(&self) -> bool {
        self.attributes.iter().any(|a| a.contains(RELATION_MARKER))
    }
}

/// Collect the scalar fields of one model body
///
/// A token that does not start with `@` opens a field and the next token is
/// its type; `@` tokens that follow are its attributes. `@@` block attributes
/// close the current field. Braced runs are skipped, along with a field whose
/// type is one.
fn parse_model_body(body: &str) -> ModelDefinition {
    let mut raw: Vec<RawField<'_>> = Vec::new();
    let mut tokens = scanner::tokens(body).into_iter().peekable();
    let mut open = false;

    while let Some(token) = tokens.next() {
        if token.starts_with("@@") {
            open = false;
            continue;
        }
        if token.starts_with('@') {
            if open {
                if let Some(field) = raw.last_mut() {
                    field.attributes.push(token);
                }
            }
            continue;
        }

        open = false;
        // a braced run is not a field declaration
        if token.starts_with('{') {
            continue;
        }
        if let Some(type_token) = tokens.next_if(|next| !next.starts_with('@')) {
            if type_token.starts_with('{') {
                continue;
            }
            raw.push(RawField {
                name: token,
                type_token,
                attributes: Vec::new(),
            });
            open = true;
        }
    }

    raw.into_iter()
        .filter(|field| !field.is_relation())
        .map(|field| (field.name, field.type_token))
        .collect()
}

/// Rewrite fields typed with a declared enum to the enum name
fn normalize_enum_fields(model: &mut ModelDefinition, enums: &IndexMap<String, EnumDefinition>) {
    for ty in model.fields.values_mut() {
        let (base, optional) = split_optional(ty);
        if let Some(definition) = enums.get(base) {
            *ty = if optional {
                format!("{}?", definition.name)
            } else {
                definition.name.clone()
            };
        }
    }
}

/// Strip every trailing `?` from a type token
fn split_optional(type_token: &str) -> (&str, bool) {
    let base = type_token.trim_end_matches('?');
    (base, base.len() != type_token.len())
}

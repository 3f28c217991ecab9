//! Schema scalar type to TypeScript type mapping

/// Map a schema type name (without the optional marker) to its TypeScript type
///
/// Types outside the scalar table (enums, other models, list types, custom
/// scalars) pass through unchanged.
///
/// # Examples
///
/// ```
/// # use modgen::types::to_typescript;
/// assert_eq!(to_typescript("Int"), "number");
/// assert_eq!(to_typescript("DateTime"), "Date");
/// assert_eq!(to_typescript("PostStatus"), "PostStatus");
/// ```
#[must_use]
pub fn to_typescript(schema_type: &str) -> &str {
    match schema_type {
        "Int" | "Float" => "number",
        "String" => "string",
        "Boolean" => "boolean",
        "DateTime" => "Date",
        "Json" => "any",
        other => other,
    }
}

//! Template renderer
//!
//! Turns template text into source code for one model. Templates reference
//! naming variants through a fixed set of placeholders:
//!
//! | Placeholder | `blog-post` renders as |
//! |---|---|
//! | `{{Model}}` | `BlogPost` |
//! | `{{model}}` | `blog-post` |
//! | `{{MODEL}}` | `BLOG-POST` |
//! | `{{ModelPlural}}` | `BlogPosts` |
//! | `{{modelPlural}}` | `blog-posts` |
//! | `{{ModuleServicesPath}}` | `BlogPostServices` |
//! | `{{fields}}` | one `name?: type;` line per schema field |
//!
//! Any other `{{...}}` token is copied through untouched. Rendering performs
//! no I/O and cannot fail.

use crate::naming::TemplateContext;
use crate::schema::ModelDefinition;
use crate::types::to_typescript;

/// Indentation of generated field declarations
pub const FIELD_INDENT: &str = "  ";

/// Placeholders understood by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    /// `{{Model}}`
    Model,
    /// `{{model}}`
    ModelLower,
    /// `{{MODEL}}`
    ModelUpper,
    /// `{{ModelPlural}}`
    ModelPlural,
    /// `{{modelPlural}}`
    ModelPluralLower,
    /// `{{ModuleServicesPath}}`
    ServicesPath,
    /// `{{fields}}`
    Fields,
}

impl Placeholder {
    /// Every recognized placeholder
    pub const ALL: [Self; 7] = [
        Self::Model,
        Self::ModelLower,
        Self::ModelUpper,
        Self::ModelPlural,
        Self::ModelPluralLower,
        Self::ServicesPath,
        Self::Fields,
    ];

    /// Name between the braces
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Model => "Model",
            Self::ModelLower => "model",
            Self::ModelUpper => "MODEL",
            Self::ModelPlural => "ModelPlural",
            Self::ModelPluralLower => "modelPlural",
            Self::ServicesPath => "ModuleServicesPath",
            Self::Fields => "fields",
        }
    }

    /// Look up a placeholder by the name between the braces
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.key() == key)
    }
}

/// Render `template` for `model_name`
///
/// When `fields` is `None` (or empty) `{{fields}}` becomes an empty string so
/// that the template still renders to valid source.
///
/// # Examples
///
/// ```
/// use modgen::render::render;
/// use modgen::schema::ModelDefinition;
///
/// let fields: ModelDefinition = [("id", "Int"), ("email", "String?")].into_iter().collect();
/// let out = render("export interface {{Model}} {\n{{fields}}}", "blog-post", Some(&fields));
/// assert_eq!(out, "export interface BlogPost {\n  id: number;\n  email?: string;\n}");
/// ```
#[must_use]
pub fn render(template: &str, model_name: &str, fields: Option<&ModelDefinition>) -> String {
    let ctx = TemplateContext::new(model_name);
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    // single pass: text produced by a substitution is never scanned again
    while let Some(open) = rest.find("{{") {
        out.push_str(&rest[..open]);
        let after_open = &rest[open + 2..];

        let placeholder = after_open
            .find("}}")
            .and_then(|close| Placeholder::from_key(&after_open[..close]).map(|p| (p, close)));

        match placeholder {
            Some((p, close)) => {
                substitute(&mut out, p, &ctx, fields);
                rest = &after_open[close + 2..];
            }
            None => {
                out.push('{');
                rest = &rest[open + 1..];
            }
        }
    }
    out.push_str(rest);

    out
}

/// Generate the `{{fields}}` block: one indented declaration per field
///
/// ```
/// use modgen::render::field_block;
/// use modgen::schema::ModelDefinition;
///
/// let fields: ModelDefinition = [("createdAt", "DateTime"), ("status", "PostStatus?")]
///     .into_iter()
///     .collect();
/// assert_eq!(field_block(&fields), "  createdAt: Date;\n  status?: PostStatus;\n");
/// ```
#[must_use]
pub fn field_block(fields: &ModelDefinition) -> String {
    let mut out = String::new();
    for field in fields.fields() {
        out.push_str(FIELD_INDENT);
        out.push_str(&field.name);
        if field.optional {
            out.push('?');
        }
        out.push_str(": ");
        out.push_str(to_typescript(&field.declared_type));
        out.push_str(";\n");
    }
    out
}

fn substitute(
    out: &mut String,
    placeholder: Placeholder,
    ctx: &TemplateContext,
    fields: Option<&ModelDefinition>,
) {
    match placeholder {
        Placeholder::Model => out.push_str(&ctx.pascal),
        Placeholder::ModelLower => out.push_str(&ctx.lower),
        Placeholder::ModelUpper => out.push_str(&ctx.upper),
        Placeholder::ModelPlural => out.push_str(&ctx.pascal_plural),
        Placeholder::ModelPluralLower => out.push_str(&ctx.lower_plural),
        Placeholder::ServicesPath => out.push_str(&ctx.services_path),
        Placeholder::Fields => {
            if let Some(fields) = fields {
                out.push_str(&field_block(fields));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::parse_schema;
    use proptest::prelude::*;

    fn user_fields() -> ModelDefinition {
        let index = parse_schema(
            "model User { id Int @id  name String  email String?  role Role @default(ADMIN)  posts Post[] @relation(fields: [id], references: [authorId]) }\nenum Role { ADMIN USER }",
        );
        index.model("User").cloned().unwrap()
    }

    #[test]
    fn test_interface_scenario() {
        let fields = user_fields();
        let out = render("export interface {{Model}} {\n{{fields}}}", "blog-post", Some(&fields));

        assert_eq!(
            out,
            "export interface BlogPost {\n  id: number;\n  name: string;\n  email?: string;\n  role: Role;\n}"
        );
    }

    #[test]
    fn test_all_naming_placeholders() {
        let out = render(
            "{{Model}}|{{model}}|{{MODEL}}|{{ModelPlural}}|{{modelPlural}}|{{ModuleServicesPath}}",
            "user",
            None,
        );
        assert_eq!(out, "User|user|USER|Users|users|UserServices");
    }

    #[test]
    fn test_naive_plural() {
        assert_eq!(render("{{ModelPlural}} {{modelPlural}}", "Tax", None), "Taxs taxs");
        assert_eq!(render("{{ModelPlural}}", "address", None), "Address");
    }

    #[test]
    fn test_repeated_placeholders_all_replaced() {
        let out = render("{{Model}} {{Model}} {{model}}{{model}}", "order", None);
        assert_eq!(out, "Order Order orderorder");
    }

    #[test]
    fn test_unknown_placeholders_left_verbatim() {
        let out = render("{{Model}} {{models}} {{ Model }} {{unknown", "user", None);
        assert_eq!(out, "User {{models}} {{ Model }} {{unknown");
    }

    #[test]
    fn test_extra_braces_around_placeholder() {
        assert_eq!(render("{{{Model}}}", "user", None), "{User}");
    }

    #[test]
    fn test_model_name_containing_placeholder_is_not_rescanned() {
        let out = render("{{Model}}", "{{model}}", None);
        assert_eq!(out, "{{Model}}");
    }

    #[test]
    fn test_fields_without_schema() {
        assert_eq!(render("a{{fields}}b", "user", None), "ab");
    }

    #[test]
    fn test_unknown_types_pass_through() {
        let fields: ModelDefinition = [("amount", "Decimal"), ("tags", "String[]")].into_iter().collect();
        assert_eq!(field_block(&fields), "  amount: Decimal;\n  tags: String[];\n");
    }

    #[test]
    fn test_json_and_boolean_mapping() {
        let fields: ModelDefinition = [("meta", "Json?"), ("active", "Boolean")].into_iter().collect();
        assert_eq!(field_block(&fields), "  meta?: any;\n  active: boolean;\n");
    }

    #[test]
    fn test_placeholder_keys_round_trip() {
        for p in Placeholder::ALL {
            assert_eq!(Placeholder::from_key(p.key()), Some(p));
        }
        assert_eq!(Placeholder::from_key("models"), None);
    }

    proptest! {
        #[test]
        fn empty_fields_equal_omitted_fields(template in "[a-z{}\\n ]{0,40}", name in "[a-z-]{1,12}") {
            let template = format!("{template}{{{{fields}}}}{template}");
            let empty = ModelDefinition::new();
            prop_assert_eq!(
                render(&template, &name, Some(&empty)),
                render(&template, &name, None)
            );
        }

        #[test]
        fn rendering_is_deterministic(name in "[a-zA-Z_-]{1,16}") {
            let template = "{{Model}} {{model}} {{MODEL}} {{ModelPlural}} {{modelPlural}} {{ModuleServicesPath}}";
            prop_assert_eq!(render(template, &name, None), render(template, &name, None));
        }

        #[test]
        fn text_without_braces_is_unchanged(text in "[a-zA-Z0-9 .;:\\n]{0,64}") {
            prop_assert_eq!(render(&text, "user", None), text);
        }
    }
}

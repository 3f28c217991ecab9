//! Naming conventions for template placeholders
//!
//! This module derives every naming variant a template can reference from the
//! free-text model name supplied by the user (`user`, `blog-post`, `Tax`).
//! Model names are never validated against an identifier grammar, so every
//! helper here accepts hyphens, underscores, whitespace and mixed case.

use serde::Serialize;

/// Naming helpers used by the template renderer
pub struct Naming;

impl Naming {
    /// Convert a model name to `PascalCase`
    ///
    /// Runs of `-` and `_` become word breaks, the first alphanumeric character
    /// of every word is upper-cased and whitespace is dropped. The remaining
    /// characters of each word keep their original case.
    ///
    /// # Examples
    ///
    /// ```
    /// # use modgen::naming::Naming;
    /// assert_eq!(Naming::to_pascal_case("blog-post"), "BlogPost");
    /// assert_eq!(Naming::to_pascal_case("user_profile"), "UserProfile");
    /// assert_eq!(Naming::to_pascal_case("orderItem"), "OrderItem");
    /// ```
    #[must_use]
    pub fn to_pascal_case(input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        let mut at_word_start = true;

        for ch in input.chars() {
            if ch == '-' || ch == '_' || ch.is_whitespace() {
                at_word_start = true;
                continue;
            }

            if ch.is_alphanumeric() {
                if at_word_start {
                    out.extend(ch.to_uppercase());
                } else {
                    out.push(ch);
                }
                at_word_start = false;
            } else {
                out.push(ch);
                at_word_start = true;
            }
        }

        out
    }

    /// Lower-case a model name verbatim (separators are kept)
    ///
    /// ```
    /// # use modgen::naming::Naming;
    /// assert_eq!(Naming::to_lower("Blog-Post"), "blog-post");
    /// ```
    #[must_use]
    pub fn to_lower(input: &str) -> String {
        input.to_lowercase()
    }

    /// Upper-case a model name verbatim (separators are kept)
    #[must_use]
    pub fn to_upper(input: &str) -> String {
        input.to_uppercase()
    }

    /// Pluralize a word by appending `s` unless it already ends in `s`
    ///
    /// Irregular plurals are not handled (`Tax` becomes `Taxs`).
    ///
    /// # Examples
    ///
    /// ```
    /// # use modgen::naming::Naming;
    /// assert_eq!(Naming::pluralize("post"), "posts");
    /// assert_eq!(Naming::pluralize("status"), "status");
    /// assert_eq!(Naming::pluralize("Tax"), "Taxs");
    /// ```
    #[must_use]
    pub fn pluralize(input: &str) -> String {
        if input.ends_with('s') {
            input.to_string()
        } else {
            format!("{input}s")
        }
    }

    /// Name of the directory holding a model's service files
    ///
    /// ```
    /// # use modgen::naming::Naming;
    /// assert_eq!(Naming::to_services_path("blog-post"), "BlogPostServices");
    /// ```
    #[must_use]
    pub fn to_services_path(input: &str) -> String {
        format!("{}Services", Self::to_pascal_case(input))
    }
}

/// Naming variants derived from one model name
///
/// Built fresh for every render call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateContext {
    /// `{{Model}}`
    pub pascal: String,
    /// `{{model}}`
    pub lower: String,
    /// `{{MODEL}}`
    pub upper: String,
    /// `{{ModelPlural}}`
    pub pascal_plural: String,
    /// `{{modelPlural}}`
    pub lower_plural: String,
    /// `{{ModuleServicesPath}}`
    pub services_path: String,
}

impl TemplateContext {
    /// Derive every naming variant for `model_name`
    #[must_use]
    pub fn new(model_name: &str) -> Self {
        let pascal = Naming::to_pascal_case(model_name);
        let lower = Naming::to_lower(model_name);

        Self {
            pascal_plural: Naming::pluralize(&pascal),
            lower_plural: Naming::pluralize(&lower),
            services_path: format!("{pascal}Services"),
            upper: Naming::to_upper(model_name),
            pascal,
            lower,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_pascal_case() {
        assert_eq!(Naming::to_pascal_case("user"), "User");
        assert_eq!(Naming::to_pascal_case("blog-post"), "BlogPost");
        assert_eq!(Naming::to_pascal_case("blog__post--item"), "BlogPostItem");
        assert_eq!(Naming::to_pascal_case("blog post"), "BlogPost");
        assert_eq!(Naming::to_pascal_case("UserProfile"), "UserProfile");
        assert_eq!(Naming::to_pascal_case("HTTP_request"), "HTTPRequest");
        assert_eq!(Naming::to_pascal_case(""), "");
    }

    #[test]
    fn test_pascal_case_punctuation_starts_word() {
        assert_eq!(Naming::to_pascal_case("foo.bar"), "Foo.Bar");
        assert_eq!(Naming::to_pascal_case("v2-api"), "V2Api");
    }

    #[test]
    fn test_lower_and_upper_keep_separators() {
        assert_eq!(Naming::to_lower("Blog-Post"), "blog-post");
        assert_eq!(Naming::to_upper("blog_post"), "BLOG_POST");
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(Naming::pluralize("user"), "users");
        assert_eq!(Naming::pluralize("news"), "news");
        assert_eq!(Naming::pluralize("Tax"), "Taxs");
        assert_eq!(Naming::pluralize("category"), "categorys");
        assert_eq!(Naming::pluralize(""), "s");
    }

    #[test]
    fn test_context_for_hyphenated_name() {
        let ctx = TemplateContext::new("blog-post");
        assert_eq!(ctx.pascal, "BlogPost");
        assert_eq!(ctx.lower, "blog-post");
        assert_eq!(ctx.upper, "BLOG-POST");
        assert_eq!(ctx.pascal_plural, "BlogPosts");
        assert_eq!(ctx.lower_plural, "blog-posts");
        assert_eq!(ctx.services_path, "BlogPostServices");
    }

    #[test]
    fn test_context_plural_of_tax() {
        let ctx = TemplateContext::new("Tax");
        assert_eq!(ctx.pascal_plural, "Taxs");
        assert_eq!(ctx.lower_plural, "taxs");
    }

    proptest! {
        #[test]
        fn context_is_idempotent(name in "[a-zA-Z_ -]{0,24}") {
            prop_assert_eq!(TemplateContext::new(&name), TemplateContext::new(&name));
        }

        #[test]
        fn pascal_case_has_no_separators(name in "[a-z_ -]{0,24}") {
            let pascal = Naming::to_pascal_case(&name);
            prop_assert!(!pascal.contains(['-', '_', ' ']));
        }

        #[test]
        fn plural_always_ends_in_s(name in "[a-zA-Z]{0,16}") {
            prop_assert!(Naming::pluralize(&name).ends_with('s'));
        }
    }
}

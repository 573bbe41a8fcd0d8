//! Structural inference over decoded JSON values.
//!
//! Three generators share the walk rules here:
//! - `typescript`: named, de-duplicated interface declarations;
//! - `schema`: JSON-Schema-aware compilation to a type block;
//! - `zod`: composable runtime-validator expressions.
//!
//! All of them are pure and total: `unknown` is the universal fallback, and
//! two calls over the same value produce byte-identical output (object keys
//! keep insertion order, nothing is randomized).

pub mod schema;
pub mod typescript;
pub mod zod;

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

static TS_IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").unwrap());

/// Two spaces per nesting level, matching the emitted block style everywhere.
pub(crate) fn indent(level: usize) -> String {
    "  ".repeat(level)
}

/// PascalCase a candidate declaration name. Non-alphanumeric runs act as word
/// separators; an empty result falls back to `Root`.
pub(crate) fn pascal_case(name: &str) -> String {
    let mut out = String::new();
    for word in name.split(|c: char| !c.is_ascii_alphanumeric()) {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    if out.is_empty() { "Root".to_string() } else { out }
}

/// Render a property key: unquoted when it is a valid identifier, else a JSON
/// string literal.
pub(crate) fn property_name(key: &str) -> String {
    if TS_IDENTIFIER.is_match(key) { key.to_string() } else { quoted(key) }
}

pub(crate) fn quoted(key: &str) -> String {
    Value::from(key).to_string()
}

/// Per-inference-run registry guaranteeing unique declaration names.
///
/// The first use of a base name keeps it bare; repeats append `2`, `3`, ...
/// so two unrelated objects sharing a property name like `user` still get
/// distinct declarations.
#[derive(Debug, Default)]
pub(crate) struct NameRegistry {
    used: IndexMap<String, usize>,
}

impl NameRegistry {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn claim(&mut self, base: &str) -> String {
        let count = self.used.entry(base.to_string()).or_insert(0);
        *count += 1;
        if *count == 1 { base.to_string() } else { format!("{base}{count}") }
    }
}

/// Inline (anonymous) type inference: renders the type in place instead of
/// lifting records into named declarations. Used for non-object roots and as
/// the plain-data fallback of the schema compiler.
pub(crate) fn inline_type(value: &Value, level: usize) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(_) => "boolean".to_string(),
        Value::Number(_) => "number".to_string(),
        Value::String(_) => "string".to_string(),
        Value::Array(items) => {
            if items.is_empty() {
                return "unknown[]".to_string();
            }
            let mut members: Vec<String> = Vec::new();
            for item in items {
                let member = inline_type(item, level + 1);
                if !members.contains(&member) {
                    members.push(member);
                }
            }
            if members.len() == 1 {
                format!("{}[]", members[0])
            } else {
                format!("({})[]", members.join(" | "))
            }
        }
        Value::Object(map) => {
            if map.is_empty() {
                return "Record<string, unknown>".to_string();
            }
            let lines: Vec<String> = map
                .iter()
                .map(|(key, child)| {
                    format!("{}{}: {};", indent(level), quoted(key), inline_type(child, level + 1))
                })
                .collect();
            format!("{{\n{}\n{}}}", lines.join("\n"), indent(level.saturating_sub(1)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pascal_case_splits_on_separator_runs() {
        assert_eq!(pascal_case("user_profile"), "UserProfile");
        assert_eq!(pascal_case("api--key"), "ApiKey");
        assert_eq!(pascal_case("items"), "Items");
        assert_eq!(pascal_case("--"), "Root");
        assert_eq!(pascal_case(""), "Root");
    }

    #[test]
    fn name_registry_counts_per_base() {
        let mut names = NameRegistry::new();
        assert_eq!(names.claim("User"), "User");
        assert_eq!(names.claim("User"), "User2");
        assert_eq!(names.claim("User"), "User3");
        assert_eq!(names.claim("Account"), "Account");
    }

    #[test]
    fn property_names_quote_non_identifiers() {
        assert_eq!(property_name("userId"), "userId");
        assert_eq!(property_name("$ref"), "$ref");
        assert_eq!(property_name("content-type"), "\"content-type\"");
        assert_eq!(property_name("1st"), "\"1st\"");
    }

    #[test]
    fn inline_union_preserves_first_seen_order() {
        let value = serde_json::json!([1, "a", 2, "b", null]);
        assert_eq!(inline_type(&value, 1), "(number | string | null)[]");
    }

    #[test]
    fn inline_empty_collections() {
        assert_eq!(inline_type(&serde_json::json!([]), 1), "unknown[]");
        assert_eq!(inline_type(&serde_json::json!({}), 1), "Record<string, unknown>");
    }
}

//! JSON Schema → TypeScript type compilation.
//!
//! The input is treated as a schema document only when it is an object
//! carrying at least one recognized schema keyword; anything else falls back
//! to plain structural inference wrapped in a `Root` record.

use std::collections::HashSet;

use serde_json::Value;

use super::{indent, inline_type, quoted};
use crate::error::Result;
use crate::lenient::parse_lenient;

const SCHEMA_KEYWORDS: [&str; 11] = [
    "$schema",
    "type",
    "properties",
    "required",
    "items",
    "$defs",
    "definitions",
    "allOf",
    "anyOf",
    "oneOf",
    "enum",
];

pub fn json_schema_to_typescript(input: &str) -> Result<String> {
    let parsed = parse_lenient(input)?;

    let looks_like_schema = parsed
        .as_object()
        .is_some_and(|map| SCHEMA_KEYWORDS.iter().any(|key| map.contains_key(*key)));

    if !looks_like_schema {
        let inferred = inline_type(&parsed, 1);
        if inferred.starts_with('{') {
            return Ok(format!("export interface Root {inferred}\n"));
        }
        return Ok(format!("export interface Root {{\n  value: {inferred};\n}}\n"));
    }

    Ok(format!("export interface Root {}\n", schema_type(&parsed, 0)))
}

fn schema_type(schema: &Value, level: usize) -> String {
    let Some(map) = schema.as_object() else {
        return "unknown".to_string();
    };

    // `enum` short-circuits everything else.
    if let Some(Value::Array(variants)) = map.get("enum") {
        let literals: Vec<String> = variants.iter().map(Value::to_string).collect();
        if literals.is_empty() {
            return "unknown".to_string();
        }
        return literals.join(" | ");
    }

    let declared = map.get("type").and_then(Value::as_str);

    if declared == Some("array") {
        let empty_schema = Value::Object(serde_json::Map::new());
        let items = map.get("items").unwrap_or(&empty_schema);
        return format!("({})[]", schema_type(items, level + 1));
    }

    // `type: "object"` or an implicit object via `properties`.
    if declared == Some("object") || map.contains_key("properties") {
        let required: HashSet<&str> = map
            .get("required")
            .and_then(Value::as_array)
            .map(|keys| keys.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default();
        let lines: Vec<String> = map
            .get("properties")
            .and_then(Value::as_object)
            .map(|properties| {
                properties
                    .iter()
                    .map(|(key, child)| {
                        // Default: nothing required, everything optional.
                        let optional = if required.contains(key.as_str()) { "" } else { "?" };
                        format!(
                            "{}{}{}: {};",
                            indent(level + 1),
                            quoted(key),
                            optional,
                            schema_type(child, level + 1)
                        )
                    })
                    .collect()
            })
            .unwrap_or_default();
        return format!("{{\n{}\n{}}}", lines.join("\n"), indent(level));
    }

    match declared {
        Some("string") => "string",
        Some("number") | Some("integer") => "number",
        Some("boolean") => "boolean",
        Some("null") => "null",
        _ => "unknown",
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_schema_marks_optionality_from_required() {
        let output = json_schema_to_typescript(
            r#"{
                "title": "User",
                "type": "object",
                "properties": {
                    "id": { "type": "number" },
                    "name": { "type": "string" },
                    "nickname": { "type": "string" }
                },
                "required": ["id", "name"]
            }"#,
        )
        .unwrap();
        assert!(output.starts_with("export interface Root {"));
        assert!(output.contains("\"id\": number;"));
        assert!(output.contains("\"name\": string;"));
        assert!(output.contains("\"nickname\"?: string;"));
    }

    #[test]
    fn missing_required_list_makes_everything_optional() {
        let output = json_schema_to_typescript(
            r#"{"type": "object", "properties": {"a": {"type": "boolean"}}}"#,
        )
        .unwrap();
        assert!(output.contains("\"a\"?: boolean;"));
    }

    #[test]
    fn array_schema_recurses_into_items() {
        let output = json_schema_to_typescript(
            r#"{"type": "array", "items": {"type": "integer"}}"#,
        )
        .unwrap();
        assert!(output.contains("(number)[]"));
    }

    #[test]
    fn array_schema_without_items_is_unknown() {
        let output = json_schema_to_typescript(r#"{"type": "array"}"#).unwrap();
        assert!(output.contains("(unknown)[]"));
    }

    #[test]
    fn enum_short_circuits_to_literal_union() {
        let output = json_schema_to_typescript(
            r#"{"type": "string", "enum": ["red", "green", 3]}"#,
        )
        .unwrap();
        assert!(output.contains(r#""red" | "green" | 3"#));
    }

    #[test]
    fn plain_data_is_not_classified_as_schema() {
        // No recognized schema keyword anywhere at the top level.
        let output = json_schema_to_typescript(r#"{"user": {"id": "1"}}"#).unwrap();
        assert!(output.starts_with("export interface Root {"));
        assert!(output.contains("\"user\":"));
        assert!(output.contains("\"id\": string;"));
    }

    #[test]
    fn scalar_fallback_wraps_in_a_value_field() {
        let output = json_schema_to_typescript("42").unwrap();
        assert_eq!(output, "export interface Root {\n  value: number;\n}\n");
    }

    #[test]
    fn nested_blocks_indent_with_depth() {
        let output = json_schema_to_typescript(
            r#"{
                "type": "object",
                "properties": {
                    "inner": {
                        "type": "object",
                        "properties": { "leaf": { "type": "string" } }
                    }
                }
            }"#,
        )
        .unwrap();
        assert!(output.contains("  \"inner\"?: {\n"));
        assert!(output.contains("    \"leaf\"?: string;\n"));
    }
}

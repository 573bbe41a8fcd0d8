//! JSON → TypeScript interfaces via recursive structural inference.
//!
//! Objects are lifted into named declarations the first time they are
//! discovered; nested occurrences reference them by name. The declaration
//! list is flat — JSON values are acyclic, so no back-references are needed.

use serde_json::Value;

use super::{NameRegistry, indent, inline_type, pascal_case, property_name};
use crate::error::Result;
use crate::lenient::parse_lenient;

pub fn json_to_typescript(input: &str) -> Result<String> {
    let parsed = parse_lenient(input)?;

    let Value::Object(map) = &parsed else {
        // Non-object root: no record extraction, just an inline alias.
        return Ok(format!("export type Root = {};\n", inline_type(&parsed, 1)));
    };

    let mut declarations: Vec<String> = Vec::new();
    let mut names = NameRegistry::new();
    let root_lines: Vec<String> = map
        .iter()
        .map(|(key, child)| {
            let child_type = named_type(child, key, &mut declarations, &mut names);
            format!("{}{}: {}", indent(1), property_name(key), child_type)
        })
        .collect();

    let root = format!("export interface Root {{\n{}\n}}", root_lines.join("\n"));
    let mut blocks = vec![root];
    blocks.extend(declarations);
    Ok(blocks.join("\n\n") + "\n")
}

/// Infer the type of `value`, lifting any object encountered into
/// `declarations` under a unique name derived from `suggested_name`.
fn named_type(
    value: &Value,
    suggested_name: &str,
    declarations: &mut Vec<String>,
    names: &mut NameRegistry,
) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(_) => "boolean".to_string(),
        Value::Number(_) => "number".to_string(),
        Value::String(_) => "string".to_string(),
        Value::Array(items) => {
            if items.is_empty() {
                return "unknown[]".to_string();
            }
            // The `Item` suffix is applied before collision resolution so
            // sibling arrays sharing a key do not collide in confusing ways.
            let item_name = format!("{suggested_name}Item");
            let mut members: Vec<String> = Vec::new();
            for item in items {
                let member = named_type(item, &item_name, declarations, names);
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
            let interface_name = names.claim(&pascal_case(suggested_name));
            let lines: Vec<String> = map
                .iter()
                .map(|(key, child)| {
                    let child_type = named_type(child, key, declarations, names);
                    format!("{}{}: {}", indent(1), property_name(key), child_type)
                })
                .collect();
            // Fields first, then the declaration itself: nested records end
            // up before the record that references them.
            declarations.push(format!(
                "export interface {interface_name} {{\n{}\n}}",
                lines.join("\n")
            ));
            interface_name
        }
    }
}

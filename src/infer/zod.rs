//! JSON → Zod validator expressions.
//!
//! Mirrors the structural walk of the TypeScript generator but emits a
//! builder expression instead of a type. Arrays validate against the first
//! element only — a deliberate simplification, not full union inference.

use serde_json::Value;

use super::indent;
use crate::error::Result;
use crate::lenient::parse_lenient;

pub fn json_to_zod(input: &str) -> Result<String> {
    let parsed = parse_lenient(input)?;
    Ok(format!(
        "import {{ z }} from \"zod\";\n\nconst schema = {};\n\ntype Schema = z.infer<typeof schema>;",
        zod_type(&parsed, 0)
    ))
}

fn zod_type(value: &Value, level: usize) -> String {
    match value {
        Value::Null => "z.null()".to_string(),
        Value::String(_) => "z.string()".to_string(),
        Value::Number(number) => {
            if is_integer(number) {
                "z.number().int()".to_string()
            } else {
                "z.number()".to_string()
            }
        }
        Value::Bool(_) => "z.boolean()".to_string(),
        Value::Array(items) => match items.first() {
            None => "z.array(z.unknown())".to_string(),
            Some(first) => format!("z.array({})", zod_type(first, level)),
        },
        Value::Object(map) => {
            if map.is_empty() {
                return "z.object({})".to_string();
            }
            let fields: Vec<String> = map
                .iter()
                .map(|(key, child)| {
                    format!("{}{}: {}", indent(level + 1), key, zod_type(child, level + 1))
                })
                .collect();
            format!("z.object({{\n{},\n{}}})", fields.join(",\n"), indent(level))
        }
    }
}

fn is_integer(number: &serde_json::Number) -> bool {
    number.is_i64() || number.is_u64() || number.as_f64().is_some_and(|f| f.fract() == 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitives_map_to_their_validators() {
        let output = json_to_zod(r#"{"a": null, "b": "x", "c": true}"#).unwrap();
        assert!(output.contains("a: z.null()"));
        assert!(output.contains("b: z.string()"));
        assert!(output.contains("c: z.boolean()"));
    }

    #[test]
    fn whole_numbers_gain_the_int_refinement() {
        let output = json_to_zod(r#"{"count": 3, "ratio": 0.5}"#).unwrap();
        assert!(output.contains("count: z.number().int()"));
        assert!(output.contains("ratio: z.number()"));
        assert!(!output.contains("ratio: z.number().int()"));
    }

    #[test]
    fn arrays_validate_against_the_first_element_only() {
        let output = json_to_zod(r#"{"xs": [1, "mixed", true]}"#).unwrap();
        assert!(output.contains("xs: z.array(z.number().int())"));

        let output = json_to_zod(r#"{"xs": []}"#).unwrap();
        assert!(output.contains("xs: z.array(z.unknown())"));
    }

    #[test]
    fn empty_object_collapses() {
        let output = json_to_zod("{}").unwrap();
        assert!(output.contains("const schema = z.object({});"));
    }

    #[test]
    fn nested_objects_compose_into_one_expression() {
        let output = json_to_zod(r#"{"user": {"id": 1}}"#).unwrap();
        assert!(output.contains("const schema = z.object({\n"));
        assert!(output.contains("  user: z.object({\n"));
        assert!(output.contains("    id: z.number().int(),\n"));
        assert!(output.ends_with("type Schema = z.infer<typeof schema>;"));
    }
}

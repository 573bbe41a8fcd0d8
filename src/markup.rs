//! Markup-side converters: HTML/SVG attribute rewrites for JSX, XML → JSON,
//! Markdown → HTML.
//!
//! The JSX rewrites are attribute renames over raw text, not a real HTML
//! parser — same scope as the transpiler: best-effort and line-oriented.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

use crate::error::{Result, TransformError};

// ————————————————————————————————————————————————————————————————————————————
// HTML / SVG → JSX
// ————————————————————————————————————————————————————————————————————————————

static ATTR_CLASS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bclass=").unwrap());
static ATTR_FOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bfor=").unwrap());
static ATTR_ONCHANGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bonchange=").unwrap());
static ATTR_ONCLICK: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bonclick=").unwrap());

static SVG_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());
static SVG_SPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s{2,}").unwrap());
static SVG_ATTRS: Lazy<[(Regex, &'static str); 6]> = Lazy::new(|| {
    [
        (Regex::new(r"\bclass=").unwrap(), "className="),
        (Regex::new(r"\bstroke-width=").unwrap(), "strokeWidth="),
        (Regex::new(r"\bstroke-linecap=").unwrap(), "strokeLinecap="),
        (Regex::new(r"\bstroke-linejoin=").unwrap(), "strokeLinejoin="),
        (Regex::new(r"\bfill-rule=").unwrap(), "fillRule="),
        (Regex::new(r"\bclip-rule=").unwrap(), "clipRule="),
    ]
});

pub fn html_to_jsx(input: &str) -> String {
    let output = ATTR_CLASS.replace_all(input, "className=");
    let output = ATTR_FOR.replace_all(&output, "htmlFor=");
    let output = ATTR_ONCHANGE.replace_all(&output, "onChange=");
    ATTR_ONCLICK.replace_all(&output, "onClick=").into_owned()
}

/// `svgo` toggles a lightweight optimization pass (comment stripping and
/// whitespace collapsing) before the attribute renames.
pub fn svg_to_jsx(input: &str, svgo: bool) -> String {
    let optimized = if svgo {
        let stripped = SVG_COMMENT.replace_all(input, "");
        SVG_SPACE_RUN.replace_all(&stripped, " ").trim().to_string()
    } else {
        input.to_string()
    };

    let mut output = optimized;
    for (pattern, replacement) in SVG_ATTRS.iter() {
        output = pattern.replace_all(&output, *replacement).into_owned();
    }
    output
}

// ————————————————————————————————————————————————————————————————————————————
// XML → JSON
// ————————————————————————————————————————————————————————————————————————————

/// Read-only XML tree walk into a JSON value. Attributes are prefixed `@_`,
/// text-only elements collapse to scalars (numeric strings become numbers),
/// repeated sibling tags fold into arrays, and text next to attributes lands
/// under `#text`.
pub fn xml_to_json(input: &str) -> Result<String> {
    let document = roxmltree::Document::parse(input)
        .map_err(|error| TransformError::engine(format!("invalid XML input: {error}")))?;

    let root = document.root_element();
    let mut top = Map::new();
    top.insert(root.tag_name().name().to_string(), element_value(root));

    serde_json::to_string_pretty(&Value::Object(top)).map_err(TransformError::engine)
}

fn element_value(node: roxmltree::Node) -> Value {
    let mut object = Map::new();

    for attribute in node.attributes() {
        object.insert(format!("@_{}", attribute.name()), text_scalar(attribute.value()));
    }

    let text: String = node
        .children()
        .filter(|child| child.is_text())
        .filter_map(|child| child.text())
        .collect::<String>()
        .trim()
        .to_string();

    let mut children: Vec<(String, Value)> = Vec::new();
    for child in node.children().filter(|child| child.is_element()) {
        children.push((child.tag_name().name().to_string(), element_value(child)));
    }

    if children.is_empty() && object.is_empty() {
        // Leaf element: just its (possibly empty) text.
        return text_scalar(&text);
    }

    if !text.is_empty() {
        object.insert("#text".to_string(), text_scalar(&text));
    }

    for (name, value) in children {
        match object.get_mut(&name) {
            None => {
                object.insert(name, value);
            }
            Some(Value::Array(items)) => items.push(value),
            Some(existing) => {
                let first = existing.take();
                *existing = Value::Array(vec![first, value]);
            }
        }
    }

    Value::Object(object)
}

fn text_scalar(text: &str) -> Value {
    if let Ok(integer) = text.parse::<i64>() {
        return Value::from(integer);
    }
    if let Ok(float) = text.parse::<f64>() {
        if float.is_finite() {
            return Value::from(float);
        }
    }
    Value::from(text)
}

// ————————————————————————————————————————————————————————————————————————————
// MARKDOWN → HTML
// ————————————————————————————————————————————————————————————————————————————

pub fn markdown_to_html(input: &str) -> String {
    let parser = pulldown_cmark::Parser::new(input);
    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, parser);
    html
}

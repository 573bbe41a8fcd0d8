//! The transformation router: one input string and one slug in, one output
//! string or one typed failure out.
//!
//! Stateless by construction — no caches, no retries, no shared mutable
//! state. Each call owns its decoded value and its name registry, so
//! independent call sites may run concurrently without interaction.

use serde_json::Value;

use crate::error::{Result, TransformError};
use crate::registry::{self, ConverterSettings, SettingValue};
use crate::{infer, lenient, markup, textcodec, transpile};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformResult {
    pub output: String,
}

pub fn transform(slug: &str, input: &str, settings: &ConverterSettings) -> Result<TransformResult> {
    // Dispatch validity comes from the registry; unrecognized keys inside
    // `settings` are simply never read.
    if registry::find_by_slug(slug).is_none() {
        return Err(TransformError::UnsupportedMode(slug.to_string()));
    }

    if input.trim().is_empty() {
        return Ok(TransformResult { output: String::new() });
    }

    log::debug!("transform slug={slug} input_len={}", input.len());

    let output = match slug {
        "svg-to-jsx" => markup::svg_to_jsx(input, bool_setting(settings, "svgo", true)),
        "html-to-jsx" => markup::html_to_jsx(input),
        "json-to-typescript" => infer::typescript::json_to_typescript(input)?,
        "json-schema-to-typescript" => infer::schema::json_schema_to_typescript(input)?,
        "json-to-zod" => infer::zod::json_to_zod(input)?,
        "json-to-yaml" => json_to_yaml(input)?,
        "json-prettify" => json_prettify(input, bool_setting(settings, "minify", false))?,
        "yaml-to-json" => yaml_to_json(input)?,
        "xml-to-json" => markup::xml_to_json(input)?,
        "markdown-to-html" => markup::markdown_to_html(input),
        "python-to-javascript" => transpile::python_to_javascript(input),
        "javascript-to-python" => transpile::javascript_to_python(input),
        "base64-encode" => textcodec::base64_encode(input),
        "base64-decode" => textcodec::base64_decode(input)?,
        "jwt-decode" => textcodec::jwt_decode(input)?,
        "url-encode" => textcodec::url_encode(input),
        "url-decode" => textcodec::url_decode(input)?,
        "rot13-encode" | "rot13-decode" => textcodec::rot13(input),
        // Registered but not yet implemented: a clearly marked stub is a
        // content decision, not an error path.
        other => unsupported_transform(other),
    };

    Ok(TransformResult { output })
}

fn bool_setting(settings: &ConverterSettings, key: &str, default: bool) -> bool {
    settings.get(key).map(SettingValue::truthy).unwrap_or(default)
}

fn unsupported_transform(slug: &str) -> String {
    [
        format!("// {slug} is a recognized converter slug."),
        "// This converter currently ships with a best-effort placeholder output.".to_string(),
        "// Full fidelity implementation for this target is pending.".to_string(),
    ]
    .join("\n")
}

// ————————————————————————————————————————————————————————————————————————————
// DATA-FORMAT HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn json_to_yaml(input: &str) -> Result<String> {
    let parsed = lenient::parse_lenient(input)?;
    let rendered = serde_yaml::to_string(&parsed)
        .map_err(|error| TransformError::engine(format!("YAML rendering failed: {error}")))?;
    Ok(rendered.trim_end().to_string())
}

fn yaml_to_json(input: &str) -> Result<String> {
    let parsed: Value = serde_yaml::from_str(input)
        .map_err(|error| TransformError::engine(format!("invalid YAML input: {error}")))?;
    serde_json::to_string_pretty(&parsed).map_err(TransformError::engine)
}

fn json_prettify(input: &str, minify: bool) -> Result<String> {
    let parsed = lenient::parse_lenient(input)?;
    let rendered = if minify {
        serde_json::to_string(&parsed)
    } else {
        serde_json::to_string_pretty(&parsed)
    };
    rendered.map_err(TransformError::engine)
}

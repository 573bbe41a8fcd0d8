//! Heuristic line-level transpilation between significant-whitespace blocks
//! (Python-like) and brace-delimited blocks (JavaScript-like).
//!
//! Neither direction is an interpreter. Both work over individually trimmed
//! lines with a fixed ordered set of pattern rewrites; expressions are never
//! parsed and strings/comments containing block syntax are not handled. That
//! scope is intentional and must stay this way.
//!
//! The forward direction pushes indent frames at `leading + 4` columns while
//! the reverse direction closes exactly one level per `}` line, so the
//! round-trip is approximate when sources use other indent widths.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::infer::indent;

// ————————————————————————————————————————————————————————————————————————————
// PYTHON → JAVASCRIPT
// ————————————————————————————————————————————————————————————————————————————

static PY_DEF: Lazy<Regex> = Lazy::new(|| Regex::new(r"^def\s+([A-Za-z_]\w*)\(([^)]*)\):$").unwrap());
static PY_IF: Lazy<Regex> = Lazy::new(|| Regex::new(r"^if\s+(.+):$").unwrap());
static PY_ELIF: Lazy<Regex> = Lazy::new(|| Regex::new(r"^elif\s+(.+):$").unwrap());
static PY_ELSE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^else:$").unwrap());
static PY_FOR_RANGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^for\s+(\w+)\s+in\s+range\((.+)\):$").unwrap());
static PY_WHILE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^while\s+(.+):$").unwrap());
static PY_PRINT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^print\((.*)\)$").unwrap());
static PY_RETURN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^return\s+(.+)$").unwrap());
static PY_TRUE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bTrue\b").unwrap());
static PY_FALSE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bFalse\b").unwrap());
static PY_NONE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bNone\b").unwrap());

pub fn python_to_javascript(input: &str) -> String {
    let normalized = input.replace("\r\n", "\n");
    let mut output: Vec<String> = Vec::new();
    // Column widths at which open blocks started; monotonically increasing.
    let mut indent_stack: Vec<usize> = vec![0];

    for raw_line in normalized.split('\n') {
        let leading = raw_line.chars().take_while(|c| c.is_whitespace()).count();
        let trimmed = raw_line.trim();

        if trimmed.is_empty() {
            output.push(String::new());
            continue;
        }

        while leading < *indent_stack.last().unwrap_or(&0) {
            indent_stack.pop();
            output.push(format!("{}}}", indent(indent_stack.len().saturating_sub(1))));
        }

        let mut converted = trimmed.to_string();
        converted = PY_DEF.replace(&converted, "function $1($2) {").into_owned();
        converted = PY_IF.replace(&converted, "if ($1) {").into_owned();
        converted = PY_ELIF.replace(&converted, "} else if ($1) {").into_owned();
        converted = PY_ELSE.replace(&converted, "} else {").into_owned();
        converted = PY_FOR_RANGE
            .replace(&converted, "for (let $1 = 0; $1 < $2; $1 += 1) {")
            .into_owned();
        converted = PY_WHILE.replace(&converted, "while ($1) {").into_owned();
        converted = PY_PRINT.replace(&converted, "console.log($1);").into_owned();
        converted = PY_TRUE.replace_all(&converted, "true").into_owned();
        converted = PY_FALSE.replace_all(&converted, "false").into_owned();
        converted = PY_NONE.replace_all(&converted, "null").into_owned();
        converted = PY_RETURN.replace(&converted, "return $1;").into_owned();

        let opens_block = converted.trim_end().ends_with('{');
        output.push(format!("{}{}", indent(indent_stack.len().saturating_sub(1)), converted));
        if opens_block {
            indent_stack.push(leading + 4);
        } else if !converted.ends_with([';', '{', '}']) {
            if let Some(last) = output.last_mut() {
                last.push(';');
            }
        }
    }

    while indent_stack.len() > 1 {
        indent_stack.pop();
        output.push(format!("{}}}", indent(indent_stack.len().saturating_sub(1))));
    }

    output.join("\n")
}

// ————————————————————————————————————————————————————————————————————————————
// JAVASCRIPT → PYTHON
// ————————————————————————————————————————————————————————————————————————————

static JS_FUNCTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^function\s+([A-Za-z_]\w*)\(([^)]*)\)\s*\{$").unwrap());
static JS_IF: Lazy<Regex> = Lazy::new(|| Regex::new(r"^if\s*\((.+)\)\s*\{$").unwrap());
static JS_ELSE_IF: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\}\s*else if\s*\((.+)\)\s*\{$").unwrap());
static JS_BRACE_ELSE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\}\s*else\s*\{$").unwrap());
static JS_ELSE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^else\s*\{$").unwrap());
static JS_WHILE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^while\s*\((.+)\)\s*\{$").unwrap());
// The regex crate has no backreferences; the three loop-variable captures are
// compared by hand before the rewrite applies.
static JS_COUNTED_FOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^for\s*\(let\s+(\w+)\s*=\s*0;\s*(\w+)\s*<\s*(.+);\s*(\w+)\s*\+=\s*1\)\s*\{$")
        .unwrap()
});
static JS_CONSOLE_LOG: Lazy<Regex> = Lazy::new(|| Regex::new(r"^console\.log\((.*)\)$").unwrap());
static JS_TRUE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\btrue\b").unwrap());
static JS_FALSE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bfalse\b").unwrap());
static JS_NULL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bnull\b").unwrap());

pub fn javascript_to_python(input: &str) -> String {
    let normalized = input.replace("\r\n", "\n");
    let mut output: Vec<String> = Vec::new();
    // Block width is one step per level here, so a plain counter suffices.
    let mut level: usize = 0;

    for raw_line in normalized.split('\n') {
        let trimmed = raw_line.trim();
        if trimmed.is_empty() {
            output.push(String::new());
            continue;
        }

        if trimmed == "}" {
            level = level.saturating_sub(1);
            continue;
        }

        let mut converted = trimmed.strip_suffix(';').unwrap_or(trimmed).to_string();

        converted = JS_FUNCTION.replace(&converted, "def $1($2):").into_owned();
        converted = JS_IF.replace(&converted, "if $1:").into_owned();
        converted = JS_ELSE_IF.replace(&converted, "elif $1:").into_owned();
        converted = JS_BRACE_ELSE.replace(&converted, "else:").into_owned();
        converted = JS_ELSE.replace(&converted, "else:").into_owned();
        converted = JS_WHILE.replace(&converted, "while $1:").into_owned();
        converted = rewrite_counted_for(&converted);
        converted = JS_CONSOLE_LOG.replace(&converted, "print($1)").into_owned();
        converted = JS_TRUE.replace_all(&converted, "True").into_owned();
        converted = JS_FALSE.replace_all(&converted, "False").into_owned();
        converted = JS_NULL.replace_all(&converted, "None").into_owned();

        let opens_block = converted.trim_end().ends_with(':');
        output.push(format!("{}{}", indent(level), converted));
        if opens_block {
            level += 1;
        }
    }

    output.join("\n")
}

fn rewrite_counted_for(line: &str) -> String {
    if let Some(caps) = JS_COUNTED_FOR.captures(line) {
        let (var, check, step) = (&caps[1], &caps[2], &caps[4]);
        if var == check && var == step {
            return format!("for {} in range({}):", var, &caps[3]);
        }
    }
    line.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn function_header_and_return_gain_block_syntax() {
        let output = python_to_javascript("def f(x):\n    return x");
        assert_eq!(output, "function f(x) {\n  return x;\n}");
    }

    #[test]
    fn block_form_transpiles_back_without_terminators() {
        let forward = python_to_javascript("def f(x):\n    return x");
        let back = javascript_to_python(&forward);
        assert!(back.contains("def f(x):"));
        assert!(back.contains("  return x"));
        assert!(!back.contains("return x;"));
    }

    #[test]
    fn elif_chain_closes_and_reopens_blocks() {
        let source = "if x > 1:\n    print(x)\nelif x < 0:\n    print(0)\nelse:\n    pass";
        let output = python_to_javascript(source);
        assert!(output.contains("if (x > 1) {"));
        assert!(output.contains("} else if (x < 0) {"));
        assert!(output.contains("} else {"));
        assert!(output.contains("console.log(x);"));
        assert!(output.ends_with("}"));
    }

    #[test]
    fn range_loop_becomes_counted_for() {
        let output = python_to_javascript("for i in range(10):\n    print(i)");
        assert!(output.contains("for (let i = 0; i < 10; i += 1) {"));
    }

    #[test]
    fn counted_for_reverses_only_when_variables_agree() {
        let output = javascript_to_python("for (let i = 0; i < 10; i += 1) {\n  print(i);\n}");
        assert!(output.contains("for i in range(10):"));

        // Mismatched loop variables stay untouched.
        let output = javascript_to_python("for (let i = 0; j < 10; i += 1) {\n}");
        assert!(output.contains("for (let i = 0; j < 10; i += 1) {"));
    }

    #[test]
    fn literal_renames_are_word_bounded() {
        let output = python_to_javascript("x = True\nnothing = None\nTruely = False");
        assert!(output.contains("x = true;"));
        assert!(output.contains("nothing = null;"));
        // `Truely` is not the literal `True`.
        assert!(output.contains("Truely = false;"));
    }

    #[test]
    fn literal_renames_invert() {
        let output = javascript_to_python("x = true;\ny = null;");
        assert!(output.contains("x = True"));
        assert!(output.contains("y = None"));
    }

    #[test]
    fn dedent_emits_one_close_per_popped_frame() {
        let source = "def outer():\n    if x:\n        print(x)\n    return x\n";
        let output = python_to_javascript(source);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "function outer() {");
        assert_eq!(lines[1], "  if (x) {");
        assert_eq!(lines[2], "    console.log(x);");
        assert_eq!(lines[3], "  }");
        assert_eq!(lines[4], "  return x;");
    }

    #[test]
    fn javascript_nesting_tracks_a_single_level_counter() {
        let source = "function f() {\n  while (a) {\n    console.log(a);\n  }\n}";
        let output = javascript_to_python(source);
        assert_eq!(output, "def f():\n  while a:\n    print(a)");
    }

    #[test]
    fn statements_get_terminators_only_when_missing() {
        let output = python_to_javascript("x = 1\ny = 2;");
        assert_eq!(output, "x = 1;\ny = 2;");
    }

    #[test]
    fn blank_lines_pass_through() {
        let output = python_to_javascript("x = 1\n\ny = 2");
        assert_eq!(output, "x = 1;\n\ny = 2;");
    }

    #[test]
    fn crlf_input_is_normalized() {
        let output = python_to_javascript("def f():\r\n    return 1\r\n");
        assert!(output.contains("function f() {"));
        assert!(output.contains("return 1;"));
    }
}

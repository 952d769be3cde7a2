//! Deterministic pretty-printing of argument-spec trees.
//! Renders a YAML value as a stable Python-style literal so regenerated
//! files are byte-identical run to run. Formatting is a pure function of
//! the tree; there is no global configuration.

use serde_yaml::Value;

const INDENT: &str = "    ";

/// Formats a value as a stable, source-embeddable literal.
///
/// Mappings and sequences are rendered one entry per line with trailing
/// commas; key order is the tree's insertion order. Formatting the same
/// tree always yields the same text.
pub fn format_value(value: &Value) -> String {
    let mut out = String::new();
    write_value(&mut out, value, 0);
    out
}

fn write_value(out: &mut String, value: &Value, level: usize) {
    match value {
        Value::Null => out.push_str("None"),
        Value::Bool(true) => out.push_str("True"),
        Value::Bool(false) => out.push_str("False"),
        Value::Number(n) => out.push_str(&n.to_string()),
        Value::String(s) => write_string(out, s),
        Value::Sequence(items) => {
            if items.is_empty() {
                out.push_str("[]");
                return;
            }
            out.push_str("[\n");
            for item in items {
                push_indent(out, level + 1);
                write_value(out, item, level + 1);
                out.push_str(",\n");
            }
            push_indent(out, level);
            out.push(']');
        }
        Value::Mapping(map) => {
            if map.is_empty() {
                out.push_str("{}");
                return;
            }
            out.push_str("{\n");
            for (key, entry) in map {
                push_indent(out, level + 1);
                write_value(out, key, level + 1);
                out.push_str(": ");
                write_value(out, entry, level + 1);
                out.push_str(",\n");
            }
            push_indent(out, level);
            out.push('}');
        }
        Value::Tagged(tagged) => write_value(out, &tagged.value, level),
    }
}

fn write_string(out: &mut String, s: &str) {
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
    out.push('"');
}

fn push_indent(out: &mut String, level: usize) {
    for _ in 0..level {
        out.push_str(INDENT);
    }
}

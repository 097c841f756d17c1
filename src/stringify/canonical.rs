//! Canonical JSON-shaped dump of a parsed key tree, used for round-trip
//! conformance checks: every scalar becomes `{"type": "...", "value": "..."}`,
//! tables become JSON objects, and arrays/array-of-tables become JSON arrays.

use crate::config::DumpConfig;
use crate::io::traits::Destination;
use crate::key::{Key, KeyKind};
use crate::stringify::common::escape_json_string;
use crate::value::Value;

/// Dumps `root` as canonical JSON text into `destination`.
pub fn dump(root: &Key, destination: &mut dyn Destination, config: DumpConfig) {
    let mut out = String::new();
    dump_object(root, &mut out, config);
    log::debug!("dumped {} bytes of canonical JSON", out.len());
    destination.add_bytes(&out);
}

/// Dumps `root` as a canonical JSON `String`.
pub fn dump_to_string(root: &Key, config: DumpConfig) -> String {
    let mut out = String::new();
    dump_object(root, &mut out, config);
    log::debug!("dumped {} bytes of canonical JSON", out.len());
    out
}

fn dump_object(node: &Key, out: &mut String, config: DumpConfig) {
    out.push('{');
    let mut entries: Vec<(&String, &Key)> = node.subkeys.iter().collect();
    if config.sort_keys() {
        entries.sort_by(|a, b| a.0.cmp(b.0));
    }
    for (i, (name, child)) in entries.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push('"');
        escape_json_string(name, out);
        out.push_str("\":");
        dump_node(child, out, config);
    }
    out.push('}');
}

fn dump_node(node: &Key, out: &mut String, config: DumpConfig) {
    if node.kind == KeyKind::ArrayTable {
        out.push('[');
        if let Some(Value::Array(rows)) = &node.value {
            for (i, row) in rows.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                if let Value::InlineTable(inner) = row {
                    dump_object(inner, out, config);
                }
            }
        }
        out.push(']');
        return;
    }

    match &node.value {
        Some(Value::InlineTable(inner)) => dump_object(inner, out, config),
        Some(value) => dump_value(value, out, config),
        None => dump_object(node, out, config),
    }
}

fn dump_value(value: &Value, out: &mut String, config: DumpConfig) {
    match value {
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                match item {
                    Value::InlineTable(inner) => dump_object(inner, out, config),
                    other => dump_value(other, out, config),
                }
            }
            out.push(']');
        }
        Value::InlineTable(inner) => dump_object(inner, out, config),
        scalar => {
            out.push_str("{\"type\":\"");
            out.push_str(scalar.dump_type_name());
            out.push_str("\",\"value\":\"");
            escape_json_string(&scalar.to_canonical_text(), out);
            out.push_str("\"}");
        }
    }
}

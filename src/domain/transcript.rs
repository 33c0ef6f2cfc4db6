use serde_json::Value;

/// Keys that may nest the transcript, visited in this fixed order.
const NESTING_KEYS: [&str; 3] = ["segments", "result", "output"];

/// Payloads nested deeper than this contribute nothing instead of
/// exhausting the stack.
const MAX_DEPTH: usize = 64;

/// Collects every reachable `"text"` string in an inference payload into a
/// single space-separated string.
///
/// The inference backend does not fix its response shape across model and
/// runtime versions, so extraction tolerates any nesting of `segments`,
/// `result` and `output` and never fails: a payload with no text anywhere
/// yields an empty string. The caller trims the result.
pub fn extract_text(value: &Value) -> String {
    let mut out = String::new();
    collect(value, 0, &mut out);
    out
}

fn collect(value: &Value, depth: usize, out: &mut String) {
    if depth >= MAX_DEPTH {
        return;
    }
    match value {
        Value::Object(map) => {
            if let Some(Value::String(text)) = map.get("text") {
                out.push_str(text);
                out.push(' ');
            }
            for key in NESTING_KEYS {
                if let Some(child) = map.get(key) {
                    collect(child, depth + 1, out);
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                collect(item, depth + 1, out);
            }
        }
        _ => {}
    }
}

use dr_core::types::Frame;
use errors::ExtractError;
use serde_json::Value;

/// Nesting bound for the recursive walk. Vendor payloads are not
/// adversarial, but unbounded nesting must not grow the stack without
/// limit; nodes below this depth are not visited.
pub const MAX_DEPTH: usize = 128;

/// Decode a frame payload and collect every report-shaped node, in
/// pre-order. Callers use only the first match.
///
/// A node matches when it is an array of length >= 5 whose fifth
/// element is a string starting (after leading whitespace) with the
/// markdown heading marker `#`. The report text sits at an
/// unpredictable, vendor-controlled depth with no reliable key names,
/// so this structural signature is the selection rule.
pub fn locate_reports(frame: &Frame) -> Result<Vec<String>, ExtractError> {
    let root: Value =
        serde_json::from_str(&frame.payload).map_err(|e| ExtractError::PayloadDecode {
            frame: frame.index,
            reason: e.to_string(),
        })?;

    Ok(find_reports(&root))
}

/// Walk an already-decoded value tree for report-shaped nodes.
pub fn find_reports(root: &Value) -> Vec<String> {
    let mut reports = Vec::new();
    visit(root, 0, &mut reports);
    reports
}

fn visit(value: &Value, depth: usize, reports: &mut Vec<String>) {
    if depth > MAX_DEPTH {
        return;
    }
    match value {
        Value::Array(items) => {
            if let Some(report) = match_report(items) {
                reports.push(report.to_string());
            }
            for item in items {
                visit(item, depth + 1, reports);
            }
        }
        Value::Object(map) => {
            for item in map.values() {
                visit(item, depth + 1, reports);
            }
        }
        _ => {}
    }
}

fn match_report(items: &[Value]) -> Option<&str> {
    if items.len() < 5 {
        return None;
    }
    let text = items[4].as_str()?;
    text.trim_start().starts_with('#').then_some(text)
}

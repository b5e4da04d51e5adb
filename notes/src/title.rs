/// Title used when a report body does not begin with a heading.
pub const FALLBACK_TITLE: &str = "DeepResearch";

/// Derive a human title from a report body.
///
/// The first line, if it starts with `#` after trimming, gives the
/// title with the heading markers and surrounding whitespace removed;
/// otherwise the fixed placeholder is used.
#[must_use]
pub fn resolve_title(body: &str) -> String {
    let first = body.lines().next().unwrap_or_default().trim();
    if first.starts_with('#') {
        first.trim_start_matches('#').trim().to_string()
    } else {
        FALLBACK_TITLE.to_string()
    }
}

/// Remove the leading H1 run from a report body.
///
/// The note renderer emits its own `# title` heading, so a body that
/// opens with one would show it twice. While the first line (trimmed)
/// starts with `# `, that line and any blank lines directly after it
/// are dropped. Consuming the whole leading run makes the operation a
/// fixpoint: applying it twice equals applying it once.
#[must_use]
pub fn strip_leading_heading(body: &str) -> String {
    let lines: Vec<&str> = body.lines().collect();
    let mut start = 0;

    while start < lines.len() && lines[start].trim().starts_with("# ") {
        start += 1;
        while start < lines.len() && lines[start].trim().is_empty() {
            start += 1;
        }
    }

    if start == 0 {
        return body.to_string();
    }
    lines[start..].join("\n")
}

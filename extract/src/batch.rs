use dr_core::types::Frame;
use serde_json::Value;
use tracing::debug;

/// Tag marking a response triple in a batch-execute chunk.
pub const FRAME_TAG: &str = "wrb.fr";

/// Decode the batch-execute stream into an ordered frame sequence.
///
/// The body alternates between bare-integer length markers and JSON
/// array chunks, each on its own line:
/// - a length marker means the *next* line is a chunk; the cursor
///   advances two lines
/// - any other non-blank line is tried as a chunk directly, covering
///   malformed streams that lack the length prefix
/// - blank lines and undecodable chunks are skipped
///
/// An empty or prefix-only body yields an empty sequence.
pub fn parse_frames(body: &[String]) -> Vec<Frame> {
    let mut frames = Vec::new();
    let mut i = 0;

    while i < body.len() {
        let line = body[i].trim();
        if line.is_empty() {
            i += 1;
            continue;
        }

        if is_length_marker(line) {
            if i + 1 >= body.len() {
                // Length marker with no chunk behind it.
                break;
            }
            collect_chunk_frames(&body[i + 1], &mut frames);
            i += 2;
        } else {
            collect_chunk_frames(line, &mut frames);
            i += 1;
        }
    }

    frames
}

fn is_length_marker(line: &str) -> bool {
    !line.is_empty() && line.bytes().all(|b| b.is_ascii_digit())
}

/// Parse one chunk line and append every matched triple's payload.
/// Decode failure skips the chunk; scanning continues at the caller.
fn collect_chunk_frames(chunk: &str, frames: &mut Vec<Frame>) {
    let outer: Value = match serde_json::from_str(chunk) {
        Ok(value) => value,
        Err(e) => {
            debug!(error = %e, "skipping undecodable chunk");
            return;
        }
    };

    let Value::Array(rows) = outer else {
        return;
    };

    for row in &rows {
        if let Some(payload) = match_triple(row) {
            frames.push(Frame::new(frames.len(), payload));
        }
    }
}

/// A frame triple is an array of at least three items whose item 0 is
/// the frame tag and whose item 2 is a string (the payload).
fn match_triple(row: &Value) -> Option<&str> {
    let items = row.as_array()?;
    if items.len() < 3 || items[0].as_str() != Some(FRAME_TAG) {
        return None;
    }
    items[2].as_str()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &str) -> Vec<String> {
        text.lines().map(str::to_string).collect()
    }

    #[test]
    fn test_length_prefixed_chunk_yields_frame() {
        let frames = parse_frames(&lines("5\n[[\"wrb.fr\",null,\"PAYLOAD\"]]"));
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].payload, "PAYLOAD");
        assert_eq!(frames[0].index, 0);
    }

    #[test]
    fn test_chunk_without_length_prefix_still_matches() {
        let frames = parse_frames(&lines("[[\"wrb.fr\",null,\"PAYLOAD\"]]"));
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].payload, "PAYLOAD");
    }

    #[test]
    fn test_empty_body_yields_no_frames() {
        assert!(parse_frames(&[]).is_empty());
        assert!(parse_frames(&lines("\n\n")).is_empty());
    }

    #[test]
    fn test_undecodable_chunk_is_skipped() {
        let frames = parse_frames(&lines(
            "12\nnot json at all\n5\n[[\"wrb.fr\",null,\"OK\"]]",
        ));
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].payload, "OK");
    }

    #[test]
    fn test_trailing_length_marker_terminates_scan() {
        let frames = parse_frames(&lines("[[\"wrb.fr\",null,\"A\"]]\n99"));
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].payload, "A");
    }

    #[test]
    fn test_non_matching_rows_are_ignored() {
        let body = lines(
            "5\n[[\"di\",12],[\"wrb.fr\",null,42],[\"wrb.fr\",null,\"GOOD\"],[\"wrb.fr\"]]",
        );
        let frames = parse_frames(&body);
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].payload, "GOOD");
    }

    #[test]
    fn test_multiple_chunks_preserve_stream_order() {
        let body = lines(
            "5\n[[\"wrb.fr\",null,\"FIRST\"]]\n\n7\n[[\"wrb.fr\",null,\"SECOND\"],[\"wrb.fr\",null,\"THIRD\"]]",
        );
        let frames = parse_frames(&body);
        let payloads: Vec<&str> = frames.iter().map(|f| f.payload.as_str()).collect();
        assert_eq!(payloads, ["FIRST", "SECOND", "THIRD"]);
        assert_eq!(frames[2].index, 2);
    }

    #[test]
    fn test_top_level_non_array_chunk_is_ignored() {
        let frames = parse_frames(&lines("5\n{\"wrb.fr\": \"nope\"}"));
        assert!(frames.is_empty());
    }

    #[test]
    fn test_blank_lines_between_tokens() {
        let frames = parse_frames(&lines("\n5\n[[\"wrb.fr\",null,\"X\"]]\n\n"));
        assert_eq!(frames.len(), 1);
    }
}

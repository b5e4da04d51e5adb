use dr_core::types::{ResearchNote, SessionNote};

/// Render the fixed research-note schema: frontmatter with title,
/// date, tags and a back-link to the owning session note, the body
/// under a synthesized H1, and a trailing source section with a second
/// back-link.
#[must_use]
pub fn render_research_note(note: &ResearchNote) -> String {
    let mut md: Vec<String> = Vec::new();
    md.push("---".to_string());
    md.push(format!("title: {}", note.title));
    md.push(format!("date: {}", note.date));
    md.push("tags: [DeepResearch, Gemini]".to_string());
    md.push(format!("source_chat: [[{}]]", note.source_session));
    md.push("---".to_string());
    md.push(String::new());
    md.push(format!("# {}", note.title));
    md.push(String::new());
    md.push(note.body.clone());
    md.push(String::new());
    md.push("---".to_string());
    md.push("## 出典チャット".to_string());
    md.push(format!("[[{}]]", note.source_session));
    md.push(String::new());
    md.join("\n")
}

/// Render the fixed session-note schema: frontmatter, a dated chat-log
/// heading, the not-extracted placeholder, and one wiki-link per
/// research note in production order.
#[must_use]
pub fn render_session_note(note: &SessionNote) -> String {
    let mut md: Vec<String> = Vec::new();
    md.push("---".to_string());
    md.push(format!("title: Gemini Chat ({})", note.date));
    md.push(format!("date: {}", note.date));
    md.push("tags: [GeminiChat]".to_string());
    md.push("---".to_string());
    md.push(String::new());
    md.push(format!("# Gemini Chat Log ({})", note.date));
    md.push(String::new());
    md.push("（チャット本文は未抽出。Deep Research リンクのみ含まれます。）".to_string());
    md.push(String::new());
    md.push("---".to_string());
    md.push("## Deep Research Links".to_string());
    md.push(String::new());
    for link in &note.links {
        md.push(format!("- [[{link}]]"));
    }
    md.push(String::new());
    md.join("\n")
}

use regex::Regex;
use std::sync::LazyLock;

/// Title used when a document has no `# ` heading line.
pub const UNTITLED: &str = "Untitled Document";

static HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^#[ \t]+(.*?)(?:[ \t]+\[(.*?)\])?\r?$").unwrap()
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleInfo {
    pub title: String,
    pub description: String,
}

/// Extracts title and description from the first `# Title [Description]` line.
///
/// The bracketed part is optional. Never fails: content without a top-level
/// heading yields [`UNTITLED`] and an empty description.
pub fn extract_title(content: &str) -> TitleInfo {
    match HEADING.captures(content) {
        Some(caps) => TitleInfo {
            title: caps.get(1).map_or("", |m| m.as_str()).trim().to_string(),
            description: caps
                .get(2)
                .map_or("", |m| m.as_str())
                .trim()
                .to_string(),
        },
        None => TitleInfo {
            title: UNTITLED.to_string(),
            description: String::new(),
        },
    }
}

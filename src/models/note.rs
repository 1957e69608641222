use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Width note text is rewrapped to for display.
pub const NOTE_LINE_WIDTH: usize = 50;

/// A titled free-text entry, optionally tagged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    pub title: String,
    /// Already rewrapped into `NOTE_LINE_WIDTH`-character lines.
    pub content: String,
    /// Names of attached tags, in attach order.
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    /// Unset until the first title or content edit.
    pub modified_at: Option<DateTime<Utc>>,
}

impl Note {
    pub fn new(title: String, content: &str) -> Self {
        Self {
            title,
            content: wrap_content(content, NOTE_LINE_WIDTH),
            tags: Vec::new(),
            created_at: Utc::now(),
            modified_at: None,
        }
    }

    pub fn set_content(&mut self, content: &str) {
        self.content = wrap_content(content, NOTE_LINE_WIDTH);
        self.touch();
    }

    pub fn rename(&mut self, title: String) {
        self.title = title;
        self.touch();
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn detach_tag(&mut self, tag: &str) {
        self.tags.retain(|t| t != tag);
    }

    fn touch(&mut self) {
        self.modified_at = Some(Utc::now());
    }
}

/// Break text into fixed-width lines, counting characters rather than bytes.
fn wrap_content(text: &str, width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(width)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_content_stays_on_one_line() {
        let note = Note::new("t".into(), "hello");
        assert_eq!(note.content, "hello");
        assert!(note.modified_at.is_none());
    }

    #[test]
    fn long_content_wraps_every_fifty_characters() {
        let note = Note::new("t".into(), &"x".repeat(120));
        let lines: Vec<&str> = note.content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].len(), 50);
        assert_eq!(lines[1].len(), 50);
        assert_eq!(lines[2].len(), 20);
    }

    #[test]
    fn wrapping_counts_characters_not_bytes() {
        let note = Note::new("t".into(), &"é".repeat(60));
        let lines: Vec<&str> = note.content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].chars().count(), 50);
    }

    #[test]
    fn edits_set_modified_at() {
        let mut note = Note::new("t".into(), "hello");
        note.set_content("changed");
        assert!(note.modified_at.is_some());

        let mut note = Note::new("t".into(), "hello");
        note.rename("t2".into());
        assert!(note.modified_at.is_some());
        assert_eq!(note.title, "t2");
    }

    #[test]
    fn empty_content_wraps_to_empty() {
        let note = Note::new("t".into(), "");
        assert_eq!(note.content, "");
    }
}

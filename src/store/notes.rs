use chrono::NaiveDate;

use super::Assistant;
use crate::error::{Entity, Error, Result};
use crate::models::{Note, Tag};

impl Assistant {
    // ==================== NOTES ====================

    pub fn add_note(&mut self, title: &str, content: &str) -> Result<()> {
        if title.is_empty() {
            return Err(Error::validation("title", "must not be empty"));
        }
        if self.note_exists(title) {
            return Err(Error::duplicate(Entity::Note, title));
        }
        self.note_order.push(title.to_string());
        self.notes
            .insert(title.to_string(), Note::new(title.to_string(), content));
        Ok(())
    }

    /// Re-key a note under a new title. The old entry is moved, not copied,
    /// so the note is never reachable under both keys or neither. Record
    /// links pointing at the old title are rewritten to the new one.
    pub fn edit_notes_title(&mut self, old_title: &str, new_title: &str) -> Result<()> {
        if new_title.is_empty() {
            return Err(Error::validation("title", "must not be empty"));
        }
        if self.note_exists(new_title) {
            return Err(Error::duplicate(Entity::Note, new_title));
        }
        let mut note = self
            .notes
            .remove(old_title)
            .ok_or_else(|| Error::not_found(Entity::Note, old_title))?;
        note.rename(new_title.to_string());
        self.note_order.retain(|t| t != old_title);
        self.note_order.push(new_title.to_string());
        self.notes.insert(new_title.to_string(), note);

        for record in self.records.values_mut() {
            for link in record.notes.iter_mut() {
                if link == old_title {
                    *link = new_title.to_string();
                }
            }
        }
        Ok(())
    }

    pub fn edit_notes_content(&mut self, title: &str, content: &str) -> Result<()> {
        let note = self
            .notes
            .get_mut(title)
            .ok_or_else(|| Error::not_found(Entity::Note, title))?;
        note.set_content(content);
        Ok(())
    }

    /// Detach the note from every record that links it, then remove it.
    pub fn remove_note(&mut self, title: &str) -> Result<()> {
        if !self.note_exists(title) {
            return Err(Error::not_found(Entity::Note, title));
        }
        for record in self.records.values_mut() {
            record.notes.retain(|t| t != title);
        }
        self.notes.remove(title);
        self.note_order.retain(|t| t != title);
        Ok(())
    }

    pub fn get_note(&self, title: &str) -> Option<&Note> {
        self.notes.get(title)
    }

    /// All notes in the order they were added (a renamed note moves to the
    /// end, like any fresh insertion).
    pub fn get_notes(&self) -> Vec<&Note> {
        self.note_order
            .iter()
            .filter_map(|title| self.notes.get(title))
            .collect()
    }

    /// Notes created between the two dates, inclusive on both ends.
    pub fn get_notes_by_period_of_dates(&self, start: NaiveDate, end: NaiveDate) -> Vec<&Note> {
        self.get_notes()
            .into_iter()
            .filter(|note| {
                let created = note.created_at.date_naive();
                created >= start && created <= end
            })
            .collect()
    }

    /// Case-insensitive substring match over titles.
    pub fn get_notes_by_word_in_title(&self, word: &str) -> Vec<&Note> {
        let needle = word.to_lowercase();
        self.get_notes()
            .into_iter()
            .filter(|note| note.title.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn get_notes_by_tag(&self, tag: &str) -> Vec<&Note> {
        self.get_notes()
            .into_iter()
            .filter(|note| note.has_tag(tag))
            .collect()
    }

    // ==================== TAGS ====================

    pub fn create_tag(&mut self, name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(Error::validation("tag", "must not be empty"));
        }
        if self.tag_exists(name) {
            return Err(Error::duplicate(Entity::Tag, name));
        }
        self.tag_order.push(name.to_string());
        self.tags.insert(name.to_string(), Tag::new(name.to_string()));
        Ok(())
    }

    /// Detach the tag from every note before dropping it from the registry,
    /// so no note ever references a tag that is gone.
    pub fn delete_tag(&mut self, name: &str) -> Result<()> {
        if !self.tag_exists(name) {
            return Err(Error::not_found(Entity::Tag, name));
        }
        for note in self.notes.values_mut() {
            note.detach_tag(name);
        }
        self.tags.remove(name);
        self.tag_order.retain(|t| t != name);
        Ok(())
    }

    pub fn get_tags(&self) -> Vec<&Tag> {
        self.tag_order
            .iter()
            .filter_map(|name| self.tags.get(name))
            .collect()
    }

    /// Attach an existing tag to an existing note. Attaching twice is a
    /// no-op.
    pub fn add_tag_to_note(&mut self, note_title: &str, tag_name: &str) -> Result<()> {
        if !self.tag_exists(tag_name) {
            return Err(Error::not_found(Entity::Tag, tag_name));
        }
        let note = self
            .notes
            .get_mut(note_title)
            .ok_or_else(|| Error::not_found(Entity::Note, note_title))?;
        if !note.has_tag(tag_name) {
            note.tags.push(tag_name.to_string());
        }
        Ok(())
    }
}

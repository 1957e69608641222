use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{Note, Record, Tag};

mod notes;
mod records;
mod tables;

pub use tables::{create_table_with_note_titles, create_table_with_notes, show_tags};

/// In-memory owner of all records, notes, and tags plus their relationships.
///
/// Entities live in key→value maps; the order vectors remember insertion
/// order, which is also iteration order for every query. Each map and its
/// order vector hold exactly the same keys.
///
/// Every mutating operation validates and checks keys before touching state,
/// so a failed call leaves the store exactly as it was.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Assistant {
    records: HashMap<String, Record>,
    record_order: Vec<String>,
    notes: HashMap<String, Note>,
    note_order: Vec<String>,
    tags: HashMap<String, Tag>,
    tag_order: Vec<String>,
}

impl Assistant {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_exists(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    pub fn note_exists(&self, title: &str) -> bool {
        self.notes.contains_key(title)
    }

    pub fn tag_exists(&self, name: &str) -> bool {
        self.tags.contains_key(name)
    }

    /// Linear scan over every record's phone list.
    pub fn phone_exists(&self, phone: &str) -> bool {
        self.records.values().any(|r| r.has_phone(phone))
    }
}

use serde::{Deserialize, Serialize};

use crate::models::{Address, Birthday, Email, Name, Phone};

/// A contact entry. Keyed in the store by the name it was created with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub name: Name,
    /// The phone given at creation plus any added later, in add order.
    pub phones: Vec<Phone>,
    pub email: Option<Email>,
    pub address: Option<Address>,
    pub birthday: Option<Birthday>,
    /// Titles of notes linked to this contact, in link order, no duplicates.
    pub notes: Vec<String>,
}

impl Record {
    pub fn new(name: Name, phone: Phone) -> Self {
        Self {
            name,
            phones: vec![phone],
            email: None,
            address: None,
            birthday: None,
            notes: Vec::new(),
        }
    }

    pub fn has_phone(&self, phone: &str) -> bool {
        self.phones.iter().any(|p| p.as_str() == phone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_the_single_creation_phone() {
        let record = Record::new(
            Name::new("alice").unwrap(),
            Phone::new("0501234567").unwrap(),
        );
        assert_eq!(record.phones.len(), 1);
        assert!(record.has_phone("0501234567"));
        assert!(!record.has_phone("0507654321"));
        assert!(record.email.is_none());
        assert!(record.notes.is_empty());
    }
}

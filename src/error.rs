//! Error types for store operations.

use std::fmt;

use thiserror::Error;

/// What kind of thing a lookup or duplicate check was about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Record,
    Note,
    Tag,
    Phone,
}

impl Entity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Record => "record",
            Self::Note => "note",
            Self::Tag => "tag",
            Self::Phone => "phone",
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// All possible errors that can occur in store operations.
///
/// Three closed kinds so callers can branch on what went wrong
/// instead of inspecting message text.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("{entity} '{key}' not found")]
    NotFound { entity: Entity, key: String },

    #[error("{entity} '{key}' already exists")]
    Duplicate { entity: Entity, key: String },
}

impl Error {
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }

    pub fn not_found(entity: Entity, key: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            key: key.into(),
        }
    }

    pub fn duplicate(entity: Entity, key: impl Into<String>) -> Self {
        Self::Duplicate {
            entity,
            key: key.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_entity_and_key() {
        let err = Error::not_found(Entity::Note, "draft");
        assert_eq!(err.to_string(), "note 'draft' not found");

        let err = Error::duplicate(Entity::Record, "alice");
        assert_eq!(err.to_string(), "record 'alice' already exists");

        let err = Error::validation("phone", "must be exactly 10 digits");
        assert_eq!(err.to_string(), "invalid phone: must be exactly 10 digits");
    }
}

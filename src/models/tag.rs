use serde::{Deserialize, Serialize};

/// A named label attachable to notes. Purely a name; notes reference it by
/// that name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
}

impl Tag {
    pub fn new(name: String) -> Self {
        Self { name }
    }
}

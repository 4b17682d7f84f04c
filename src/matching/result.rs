use std::fmt;

use crate::core::AliasEntry;

/// An alias entry with no fuzzy match among the canonical names. Displays
/// as a checklist line, `code: alias-string`.
#[derive(Debug)]
pub struct MissingEntry {
    code: String,
    names: String,
}

impl MissingEntry {
    pub fn from_entry(entry: &AliasEntry) -> Self {
        MissingEntry {
            code: entry.code().clone(),
            names: entry.names().clone(),
        }
    }
}

impl fmt::Display for MissingEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.names)
    }
}

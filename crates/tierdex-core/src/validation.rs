//! Required-field checks for difficulty entries.
//!
//! Validation never stops at the first problem: every required field of
//! every entry is checked, and the caller collects the full list.

use crate::schema::Difficulty;

/// Fields every difficulty entry must carry, in reporting order.
pub const REQUIRED_FIELDS: [&str; 4] = ["name", "decal_id", "rating", "overview"];

/// Presence check for each of [`REQUIRED_FIELDS`], in the same order.
const PRESENCE: [fn(&Difficulty) -> bool; 4] = [
    |d| d.name.is_some(),
    |d| d.decal_id.is_some(),
    |d| d.rating.is_some(),
    |d| d.overview.is_some(),
];

/// Name shown for entries that have no `name` at all.
const UNNAMED: &str = "UNNAMED";

/// A problem with one difficulty entry in one source file.
///
/// `position` is 1-based, as shown to whoever edits the file.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("[{file}] Difficulty #{position} (\"{name}\"): missing field '{field}'")]
    MissingField {
        file: String,
        position: usize,
        name: String,
        field: &'static str,
    },

    #[error("[{file}] Difficulty #{position}: 'name' is empty")]
    EmptyName { file: String, position: usize },
}

impl ValidationError {
    pub fn file(&self) -> &str {
        match self {
            ValidationError::MissingField { file, .. } | ValidationError::EmptyName { file, .. } => {
                file
            }
        }
    }

    pub fn position(&self) -> usize {
        match self {
            ValidationError::MissingField { position, .. }
            | ValidationError::EmptyName { position, .. } => *position,
        }
    }
}

/// Check one entry. `index` is the zero-based position within its file.
pub fn validate_difficulty(diff: &Difficulty, source_file: &str, index: usize) -> Vec<ValidationError> {
    let position = index + 1;
    let mut errors = Vec::new();

    for (field, present) in REQUIRED_FIELDS.into_iter().zip(PRESENCE) {
        if !present(diff) {
            errors.push(ValidationError::MissingField {
                file: source_file.to_string(),
                position,
                name: diff.name.clone().unwrap_or_else(|| UNNAMED.to_string()),
                field,
            });
        } else if field == "name" && diff.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
            errors.push(ValidationError::EmptyName {
                file: source_file.to_string(),
                position,
            });
        }
    }

    errors
}

//! Turns a loaded collection into its compiled form.

use crate::rating::SortKey;
use crate::schema::{Collection, Difficulty, TaggedDifficulty};
use crate::validation::{ValidationError, validate_difficulty};

/// Name of the placeholder entry written by the template generator.
pub const PLACEHOLDER_NAME: &str = "Example Difficulty";

/// Anything that can be ordered by rating.
pub trait Rated {
    fn sort_key(&self) -> SortKey;
}

impl Rated for Difficulty {
    fn sort_key(&self) -> SortKey {
        Difficulty::sort_key(self)
    }
}

impl Rated for TaggedDifficulty {
    fn sort_key(&self) -> SortKey {
        self.difficulty.sort_key()
    }
}

/// Stable ascending sort by rating key.
pub fn sort_by_rating<T: Rated>(items: &mut [T]) {
    items.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
}

/// The untouched template placeholder: named `"Example Difficulty"` with a
/// rating equal to zero.
pub fn is_placeholder(diff: &Difficulty) -> bool {
    diff.name.as_deref() == Some(PLACEHOLDER_NAME)
        && diff.rating.as_ref().is_some_and(|r| r.is_zero())
}

/// A compiled collection and the problems found while compiling it.
#[derive(Debug, Clone, PartialEq)]
pub struct Processed {
    pub collection: Collection,
    pub errors: Vec<ValidationError>,
}

/// Drop the placeholder, validate what is left in input order, then sort.
pub fn process_collection(mut collection: Collection, source_file: &str) -> Processed {
    collection.difficulties.retain(|d| !is_placeholder(d));

    let errors = collection
        .difficulties
        .iter()
        .enumerate()
        .flat_map(|(i, d)| validate_difficulty(d, source_file, i))
        .collect();

    sort_by_rating(&mut collection.difficulties);

    Processed { collection, errors }
}

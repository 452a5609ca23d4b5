//! Core data model and pure transforms for the tierdex build pipeline.
//!
//! Nothing in this crate touches the filesystem. Loading and writing live in
//! `tierdex-data`; this crate only knows how to classify ratings, validate
//! entries and turn a raw collection into its compiled form.

pub mod process;
pub mod rating;
pub mod schema;
pub mod validation;

pub use process::{Processed, Rated, process_collection, sort_by_rating};
pub use rating::{Rating, RatingClass, SortKey};
pub use schema::{
    AllDifficulties, ChainSummary, ClassSummary, Collection, CollectionKind, Difficulty, Index,
    TaggedDifficulty,
};
pub use validation::{ValidationError, validate_difficulty};

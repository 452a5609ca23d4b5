//! Rating representation and the sort key derived from it.
//!
//! Ratings in the source files are heterogeneous: plain numbers, numeric
//! strings, sentinel tokens such as `"inf"` or `"???"`, and compound strings
//! like `"13 (flow)"`. [`Rating::classify`] folds all of these into a
//! [`RatingClass`], and [`SortKey`] puts a total order over the classes:
//!
//! `NegInfinity < Finite(_) < Infinity < Malformed < Unrated`

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::cmp::Ordering;

/// Token for the easiest possible rating.
pub const NEG_INF_TOKEN: &str = "-inf";

/// Token for the hardest possible rating.
pub const INF_TOKEN: &str = "inf";

/// Tokens meaning "unrated or unbounded". These always sort last.
pub const UNRATED_TOKENS: [&str; 4] = ["???", "N/A", "Unending", "251+"];

// ===========================================================================
// Rating
// ===========================================================================

/// A rating exactly as it appeared in a source file.
///
/// Serializes back to the same JSON shape it was read from, so an integer
/// rating stays an integer in compiled output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Rating {
    Number(Number),
    Text(String),
    /// `null`, booleans, arrays and objects.
    Other(Value),
}

/// What a rating means for ordering purposes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RatingClass {
    NegInfinity,
    /// Never NaN and never infinite.
    Finite(f64),
    Infinity,
    /// Present but not interpretable as a number or a known token.
    Malformed,
    Unrated,
}

impl Rating {
    /// Classify this rating. Rules are applied in order: sentinel tokens,
    /// a full numeric parse, a parse of the first whitespace-separated token,
    /// and finally [`RatingClass::Malformed`].
    pub fn classify(&self) -> RatingClass {
        match self {
            Rating::Number(n) => n.as_f64().map_or(RatingClass::Malformed, classify_float),
            Rating::Text(s) => classify_text(s),
            Rating::Other(Value::Bool(b)) => RatingClass::Finite(if *b { 1.0 } else { 0.0 }),
            Rating::Other(_) => RatingClass::Malformed,
        }
    }

    pub fn sort_key(&self) -> SortKey {
        SortKey(self.classify())
    }

    /// Whether this rating compares equal to the number zero.
    pub fn is_zero(&self) -> bool {
        match self {
            Rating::Number(n) => n.as_f64() == Some(0.0),
            Rating::Other(Value::Bool(b)) => !b,
            _ => false,
        }
    }
}

fn classify_text(s: &str) -> RatingClass {
    if s == NEG_INF_TOKEN {
        return RatingClass::NegInfinity;
    }
    if s == INF_TOKEN {
        return RatingClass::Infinity;
    }
    if UNRATED_TOKENS.contains(&s) {
        return RatingClass::Unrated;
    }

    s.trim()
        .parse::<f64>()
        .ok()
        .or_else(|| s.split_whitespace().next()?.parse::<f64>().ok())
        .map_or(RatingClass::Malformed, classify_float)
}

fn classify_float(v: f64) -> RatingClass {
    if v.is_nan() {
        RatingClass::Malformed
    } else if v == f64::INFINITY {
        RatingClass::Infinity
    } else if v == f64::NEG_INFINITY {
        RatingClass::NegInfinity
    } else {
        RatingClass::Finite(v)
    }
}

impl From<&str> for Rating {
    fn from(s: &str) -> Self {
        Rating::Text(s.to_string())
    }
}

impl From<i32> for Rating {
    fn from(v: i32) -> Self {
        Rating::Number(v.into())
    }
}

impl From<i64> for Rating {
    fn from(v: i64) -> Self {
        Rating::Number(v.into())
    }
}

impl From<f64> for Rating {
    fn from(v: f64) -> Self {
        Number::from_f64(v).map_or(Rating::Other(Value::Null), Rating::Number)
    }
}

// ===========================================================================
// Sort key
// ===========================================================================

/// Totally ordered key for sorting difficulties by rating.
#[derive(Debug, Clone, Copy)]
pub struct SortKey(RatingClass);

impl SortKey {
    /// Key used for entries that carry no rating at all.
    pub const MISSING: SortKey = SortKey(RatingClass::Malformed);

    fn bucket(&self) -> u8 {
        match self.0 {
            RatingClass::NegInfinity => 0,
            RatingClass::Finite(_) => 1,
            RatingClass::Infinity => 2,
            RatingClass::Malformed => 3,
            RatingClass::Unrated => 4,
        }
    }
}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.0, other.0) {
            (RatingClass::Finite(a), RatingClass::Finite(b)) => {
                a.partial_cmp(&b).unwrap_or(Ordering::Equal)
            }
            _ => self.bucket().cmp(&other.bucket()),
        }
    }
}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SortKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SortKey {}

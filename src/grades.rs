use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumCount, EnumIter, EnumString};

/// The nine grade codes of the national grading scale, best to worst.
///
/// Variant order is the alphabet order, so `Ord` and `EnumIter` both walk
/// from `A1` down to `F9`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    EnumCount,
    Display,
    AsRefStr,
)]
pub enum Grade {
    A1,
    B2,
    B3,
    C4,
    C5,
    C6,
    D7,
    E8,
    F9,
}

impl Grade {
    /// Parses an exact grade code. `"a1"` and `" A1"` are not grades.
    pub fn parse(code: &str) -> Option<Self> {
        code.parse().ok()
    }

    pub fn is_grade_code(s: &str) -> bool {
        Self::parse(s).is_some()
    }

    /// Weight used by the aggregate: 1 (best) to 9 (worst).
    pub fn aggregate_weight(self) -> u32 {
        match self {
            Self::A1 => 1,
            Self::B2 => 2,
            Self::B3 => 3,
            Self::C4 => 4,
            Self::C5 => 5,
            Self::C6 => 6,
            Self::D7 => 7,
            Self::E8 => 8,
            Self::F9 => 9,
        }
    }

    /// Per-subject point score: 10 (best) down to 0.
    pub fn point_score(self) -> u32 {
        match self {
            Self::A1 => 10,
            Self::B2 => 8,
            Self::B3 => 6,
            Self::C4 => 4,
            Self::C5 => 2,
            Self::C6 => 1,
            Self::D7 | Self::E8 | Self::F9 => 0,
        }
    }
}

/// Aggregate weight of a raw grade string, `None` when it is not a grade code.
pub fn weight_of(code: &str) -> Option<u32> {
    Grade::parse(code).map(Grade::aggregate_weight)
}

/// Point score of a raw grade string, `None` when it is not a grade code.
pub fn points_of(code: &str) -> Option<u32> {
    Grade::parse(code).map(Grade::point_score)
}

use crate::consts::{CORE_MATHS_KEY, ELECTIVE_MATHS_KEY, PHYSICS_KEY};
use crate::grades::points_of;
use crate::record::SubjectResults;

/// Point score (0..=10) for one subject; 0 when absent or not a grade code.
pub fn score_for_subject(results: &SubjectResults, subject: &str) -> u32 {
    results.get(subject).and_then(points_of).unwrap_or(0)
}

pub fn assign_core_maths_score(results: &SubjectResults) -> u32 {
    score_for_subject(results, CORE_MATHS_KEY)
}

pub fn assign_elective_maths_score(results: &SubjectResults) -> u32 {
    score_for_subject(results, ELECTIVE_MATHS_KEY)
}

pub fn assign_physics_score(results: &SubjectResults) -> u32 {
    score_for_subject(results, PHYSICS_KEY)
}

pub mod aggregate;
pub mod bands;
pub mod counts;
pub mod points;
pub mod types;

pub use self::aggregate::calculate_aggregate;
pub use self::bands::assign_score;
pub use self::counts::count_grades;
pub use self::points::{
    assign_core_maths_score, assign_elective_maths_score, assign_physics_score,
    score_for_subject,
};
pub use self::types::{GradeCounts, ScoreReport};
use crate::record::SubjectResults;

impl ScoreReport {
    /// Runs every scoring step over one set of results.
    pub fn from_results(results: &SubjectResults) -> Self {
        let aggregate_score = calculate_aggregate(results);

        Self {
            grade_counts: count_grades(results),
            core_maths_score: assign_core_maths_score(results),
            elective_maths_score: assign_elective_maths_score(results),
            physics_score: assign_physics_score(results),
            aggregate_score,
            final_score: assign_score(aggregate_score),
        }
    }
}
